//! Prompt templates.
//!
//! Pure functions that turn a show name and a [`Category`] into the
//! instructions sent to the language model and the image service. They do
//! no I/O and are deterministic for identical inputs.

use fancast_models::{Category, STORYBOARD_SCENE_COUNT};

/// Fixed instruction for the subject classifier. The model is asked for a
/// one-word answer.
pub const CLASSIFIER_INSTRUCTION: &str =
    "Is the person in this photo male or female? Reply with only one word: male or female";

/// Build the storyboard instruction.
///
/// The show name appears exactly twice: in the fan-fiction framing and in
/// the mini-plot request. The lead is only ever referred to by role, never
/// by physical appearance, since the look comes from the reference photo.
pub fn storyboard_instruction(show_name: &str, category: Category) -> String {
    let adjective = category.lead_adjective();
    let noun = category.lead_noun();
    let possessive = category.possessive();
    let person_ref = format!("the {} from the reference photo", noun);
    let person_ref_alt = format!("the {} in the reference image", noun);

    format!(
        "You are a storyboard artist for a short drama fan fiction of '{show_name}'. \
         The user will be cast as the {adjective_upper} lead/love interest character in the story. \
         A reference photo of the user will be provided to the image generator.\n\n\
         Create a {count}-scene storyboard that tells a consistent, compelling mini-plot \
         inspired by '{show_name}'. Each scene should build on the previous one.\n\n\
         IMPORTANT: In every scene prompt, refer to the {adjective} lead as '{person_ref}' \
         or '{person_ref_alt}'. Describe {possessive} actions, pose, and expression, \
         but do NOT describe {possessive} physical appearance (hair color, skin tone, etc.) since \
         {possessive} look comes from the reference photo. You may describe the other characters normally.\n\n\
         For each scene, write an image generation prompt (2-3 sentences) describing:\n\
         - The visual composition and setting\n\
         - The {adjective} lead's (from reference photo) action, pose, and expression\n\
         - Other characters and their appearance\n\
         - Cinematic lighting, mood, and camera angle\n\
         - Keep it in 9:16 portrait format\n\n\
         Return ONLY a JSON array of {count} objects, each with 'scene_number' (1-{count}) and 'prompt'. \
         No markdown, no explanation, just the JSON array.",
        adjective_upper = adjective.to_uppercase(),
        count = STORYBOARD_SCENE_COUNT,
    )
}

/// Build the opening-scene instruction used as a video prompt.
pub fn opening_scene_instruction(show_name: &str) -> String {
    format!(
        "Describe the iconic opening/first scene of '{show_name}' in 2-3 sentences \
         as a video generation prompt. Focus on: visual action, mood, camera movement, \
         and cinematic style. Make it vivid and specific for generating a short 5-second \
         video clip. The scene should feature the protagonist in a dramatic moment. \
         Do not include any preamble - just output the scene description directly."
    )
}

/// Wrap a scene prompt with the face-preservation instruction.
pub fn face_preservation_prompt(scene_prompt: &str, category: Category) -> String {
    format!(
        "Use the face and appearance of the person in the reference image as the {} lead character. \
         Keep {} face, identity, and features exactly as shown in the reference photo. \
         Place them into this scene: {}",
        category.lead_adjective(),
        category.possessive(),
        scene_prompt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storyboard_mentions_show_name_twice() {
        for category in [Category::Primary, Category::Alternate] {
            let prompt = storyboard_instruction("Firefly", category);
            assert_eq!(prompt.matches("'Firefly'").count(), 2);
        }
    }

    #[test]
    fn test_storyboard_alternate_uses_role_descriptors() {
        let prompt = storyboard_instruction("Firefly", Category::Alternate);
        assert!(prompt.contains("FEMALE lead"));
        assert!(prompt.contains("'the woman from the reference photo'"));
        assert!(prompt.contains("'the woman in the reference image'"));
        assert!(prompt.contains("do NOT describe her physical appearance"));
        assert!(!prompt.contains("the man from"));
        assert!(!prompt.contains(" his "));
    }

    #[test]
    fn test_storyboard_primary_is_symmetric() {
        let prompt = storyboard_instruction("Firefly", Category::Primary);
        assert!(prompt.contains("MALE lead"));
        assert!(!prompt.contains("FEMALE"));
        assert!(prompt.contains("'the man from the reference photo'"));
        assert!(prompt.contains("do NOT describe his physical appearance"));
        assert!(!prompt.contains("woman"));
        assert!(!prompt.contains(" her "));
    }

    #[test]
    fn test_storyboard_demands_bare_json() {
        let prompt = storyboard_instruction("Firefly", Category::Primary);
        assert!(prompt.contains("Return ONLY a JSON array of 5 objects"));
        assert!(prompt.contains("'scene_number' (1-5)"));
        assert!(prompt.contains("No markdown"));
    }

    #[test]
    fn test_show_name_kept_verbatim() {
        let show = "Grey's Anatomy: Season 2 — \"Pilot\"";
        assert_eq!(storyboard_instruction(show, Category::Primary).matches(show).count(), 2);
        assert_eq!(opening_scene_instruction(show).matches(show).count(), 1);
    }

    #[test]
    fn test_opening_scene_instruction() {
        let prompt = opening_scene_instruction("Firefly");
        assert_eq!(prompt.matches("Firefly").count(), 1);
        assert!(prompt.contains("5-second"));
        assert!(prompt.contains("Do not include any preamble"));
    }

    #[test]
    fn test_face_preservation_prompt() {
        let prompt = face_preservation_prompt("A rainy rooftop at night.", Category::Alternate);
        assert!(prompt.starts_with("Use the face and appearance of the person in the reference image"));
        assert!(prompt.contains("as the female lead character"));
        assert!(prompt.contains("Keep her face, identity, and features exactly"));
        assert!(prompt.ends_with("Place them into this scene: A rainy rooftop at night."));

        let prompt = face_preservation_prompt("A rainy rooftop at night.", Category::Primary);
        assert!(prompt.contains("as the male lead character"));
        assert!(prompt.contains("Keep his face"));
    }

    #[test]
    fn test_templates_are_deterministic() {
        assert_eq!(
            storyboard_instruction("Firefly", Category::Alternate),
            storyboard_instruction("Firefly", Category::Alternate)
        );
    }
}
