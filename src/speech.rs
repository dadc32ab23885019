//! Voice assistant
//!
//! Builds the spoken summary of a recommendation and hands it to an external
//! text-to-speech service. Synthesis is an opaque `text → audio bytes` call;
//! failures come back as `ExternalServiceFailure` and are never retried.
//! Scoring never depends on this module.

use crate::error::{AdvisorResult, CropAdvisorError, SpeechError};
use crate::scorer::RecommendationResult;
use base64::{engine::general_purpose, Engine as _};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Default MIME type of synthesized audio
pub const DEFAULT_AUDIO_MIME: &str = "audio/mp3";

/// External text-to-speech service
pub trait SpeechSynthesizer: Send + Sync {
    /// Convert `text` to audio in the given language (e.g. "hi", "en")
    fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, SpeechError>;

    /// MIME type of the bytes `synthesize` returns
    fn mime_type(&self) -> &str {
        DEFAULT_AUDIO_MIME
    }
}

/// Hindi sentence naming the best crops for the farm
///
/// "आपके खेत के लिए सबसे अच्छे फसल हैं Mustard, Wheat और Maize."
pub fn voice_prompt(crop_names: &[&str]) -> String {
    match crop_names {
        [] => String::new(),
        [only] => format!("आपके खेत के लिए सबसे अच्छी फसल है {}.", only),
        [rest @ .., last] => format!(
            "आपके खेत के लिए सबसे अच्छे फसल हैं {} और {}.",
            rest.join(", "),
            last
        ),
    }
}

/// Voice prompt for the first three crops of the primary ordering
pub fn result_voice_prompt(result: &RecommendationResult) -> String {
    let names = result.crop_names();
    voice_prompt(&names[..names.len().min(3)])
}

/// Synthesized audio plus the text it speaks
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceClip {
    pub text: String,
    pub language_code: String,
    pub mime_type: String,
    pub audio: Vec<u8>,
}

impl VoiceClip {
    /// `data:audio/mp3;base64,...` for embedding in an `<audio>` element
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            general_purpose::STANDARD.encode(&self.audio)
        )
    }
}

/// Speaks recommendation summaries through a synthesizer
pub struct VoiceAssistant<S> {
    synthesizer: S,
    language_code: String,
}

impl<S: SpeechSynthesizer> VoiceAssistant<S> {
    /// Hindi by default
    pub fn new(synthesizer: S) -> Self {
        Self {
            synthesizer,
            language_code: "hi".to_string(),
        }
    }

    pub fn with_language(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Speak the top crops of a result
    pub fn speak(&self, result: &RecommendationResult) -> AdvisorResult<VoiceClip> {
        self.say(&result_voice_prompt(result))
    }

    /// Speak arbitrary text
    pub fn say(&self, text: &str) -> AdvisorResult<VoiceClip> {
        let audio = self
            .synthesizer
            .synthesize(text, &self.language_code)
            .map_err(|source| {
                tracing::warn!("Speech synthesis failed: {}", source);
                CropAdvisorError::ExternalServiceFailure {
                    service: "speech",
                    source,
                }
            })?;

        Ok(VoiceClip {
            text: text.to_string(),
            language_code: self.language_code.clone(),
            mime_type: self.synthesizer.mime_type().to_string(),
            audio,
        })
    }
}

/// Runs an external TTS program that writes audio to stdout
///
/// `{text}` and `{lang}` in the arguments are replaced per call, e.g.
/// `espeak-ng -v {lang} --stdout {text}`.
#[derive(Debug, Clone)]
pub struct CommandSynthesizer {
    program: PathBuf,
    args: Vec<String>,
    mime_type: String,
}

impl CommandSynthesizer {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            mime_type: DEFAULT_AUDIO_MIME.to_string(),
        }
    }

    /// `espeak-ng` producing WAV on stdout
    pub fn espeak() -> Self {
        Self::new(
            "espeak-ng",
            vec![
                "-v".to_string(),
                "{lang}".to_string(),
                "--stdout".to_string(),
                "{text}".to_string(),
            ],
        )
        .with_mime_type("audio/wav")
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    fn expand_args(&self, text: &str, language_code: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace("{lang}", language_code).replace("{text}", text))
            .collect()
    }
}

impl SpeechSynthesizer for CommandSynthesizer {
    fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, SpeechError> {
        // Keep the text on one line for programs that read line-wise
        let clean_text = text.replace('\n', " ").replace('\r', "");
        let output = Command::new(&self.program)
            .args(self.expand_args(&clean_text, language_code))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| SpeechError::new(format!("Failed to run {:?}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(SpeechError::new(format!(
                "{:?} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(SpeechError::new(format!("{:?} produced no audio", self.program)));
        }
        Ok(output.stdout)
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}
