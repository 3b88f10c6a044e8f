// Merit statement engine: form state, prompt building, completion parsing.
// All LLM calls go through llm_client::TextGenerator.

pub mod form;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompt_builder;
pub mod prompts;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, TextGenerator};
    use crate::merit::form::FormInput;

    pub fn complete_form() -> FormInput {
        FormInput {
            name: "홍길동".to_string(),
            organization: "한국전력공사".to_string(),
            department: "전력연구원".to_string(),
            position: "책임연구원".to_string(),
            tenure: "2015.03.01 ~ 현재".to_string(),
        }
    }

    /// Records every (context, instructions) pair and replies with a canned completion.
    pub struct StubGenerator {
        reply: Option<String>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl StubGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn complete(&self, context: &str, instructions: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((context.to_string(), instructions.to_string()));
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(LlmError::Api {
                    status: 429,
                    message: "Rate limit reached".to_string(),
                }),
            }
        }
    }
}
