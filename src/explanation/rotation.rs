use crate::data::{CropCatalog, CropProfile};
use smallvec::SmallVec;

/// Shown under every rotation card
pub const ROTATION_BENEFIT: &str = "This improves soil fertility and reduces pest risk.";

/// "Pulses, Mustard"
pub fn partner_list(crop: &CropProfile) -> String {
    crop.rotation_partners.join(", ")
}

/// Rationale attached to a recommended crop
///
/// Always names the crop's rotation partners. When the query has a previous
/// crop, adds a note if the crop repeats it or if the previous crop's profile
/// lists this crop as a follow-up.
pub fn rotation_rationale(
    crop: &CropProfile,
    previous_crop: Option<&str>,
    catalog: &CropCatalog,
) -> String {
    let mut notes: SmallVec<[String; 3]> = SmallVec::new();

    if crop.rotation_partners.is_empty() {
        notes.push(format!("No rotation partners recorded for {}.", crop.name));
    } else {
        notes.push(format!(
            "After harvesting {}, rotate with {} to preserve fertility.",
            crop.name,
            partner_list(crop)
        ));
    }

    if let Some(prev) = previous_crop {
        if prev.eq_ignore_ascii_case(&crop.name) {
            notes.push(format!(
                "{} was also grown last season; planting it again raises pest and disease pressure.",
                crop.name
            ));
        } else if let Some(profile) = catalog.get(prev).filter(|p| p.rotates_into(&crop.name)) {
            notes.push(format!("Follows {} well in rotation.", profile.name));
        }
    }

    notes.join(" ")
}
