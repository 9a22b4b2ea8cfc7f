//! Subject classification from a photo.

use fancast_models::{Category, PhotoRef};
use fancast_prompts::CLASSIFIER_INSTRUCTION;
use tracing::info;

use crate::client::LlmClient;
use crate::error::LlmResult;
use crate::types::{ContentBlock, Message};

/// The model is asked for a single word.
const CLASSIFIER_MAX_TOKENS: u32 = 10;

impl LlmClient {
    /// Classify the subject of a photo.
    ///
    /// Any reply that does not name the alternate category resolves to
    /// [`Category::Primary`]; only transport and service errors fail.
    pub async fn classify_subject(&self, photo: &PhotoRef) -> LlmResult<Category> {
        let message = Message::user(vec![
            ContentBlock::base64_image(photo.media_type(), photo.payload()),
            ContentBlock::text(CLASSIFIER_INSTRUCTION),
        ]);

        let reply = self.complete(CLASSIFIER_MAX_TOKENS, message).await?;
        let category = Category::from_reply(&reply);

        info!(category = %category, reply = %reply.trim(), "Classified subject photo");
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{test_client, text_reply};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer};

    #[tokio::test]
    async fn test_sends_image_and_instruction() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(body_partial_json(json!({
                "max_tokens": 10,
                "messages": [{
                    "role": "user",
                    "content": [
                        {"type": "image", "source": {"type": "base64", "media_type": "image/png", "data": "AAAA"}},
                        {"type": "text", "text": CLASSIFIER_INSTRUCTION}
                    ]
                }]
            })))
            .respond_with(text_reply("Female."))
            .expect(1)
            .mount(&server)
            .await;

        let photo = PhotoRef::parse("data:image/png;base64,AAAA").unwrap();
        let category = test_client(&server).classify_subject(&photo).await.unwrap();
        assert_eq!(category, Category::Alternate);
    }

    #[tokio::test]
    async fn test_unexpected_reply_defaults_to_primary() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(text_reply("I'm not able to determine that."))
            .mount(&server)
            .await;

        let photo = PhotoRef::parse("data:image/jpeg;base64,AAAA").unwrap();
        let category = test_client(&server).classify_subject(&photo).await.unwrap();
        assert_eq!(category, Category::Primary);
    }
}
