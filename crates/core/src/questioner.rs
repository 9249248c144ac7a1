use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub content: String,
}

/// Contract for the component that writes interview questions.
///
/// The HTTP handlers depend on this trait rather than on a concrete client,
/// so tests can drive them with a mock and another LLM provider can be
/// dropped in without touching the flow logic.
#[async_trait]
pub trait Questioner: Send + Sync {
    /// Produces an initial batch of questions from the resume and role.
    async fn generate_questions(&self, resume_context: &str, role: &str) -> Result<Vec<String>>;

    /// Produces the next fresh question, avoiding ground already covered.
    async fn next_question(
        &self,
        resume_context: &str,
        role: &str,
        prior_questions: &[String],
    ) -> Result<String>;

    /// Produces a clarifying follow-up probing the identified weak areas.
    async fn followup_question(
        &self,
        resume_context: &str,
        role: &str,
        last_question: &str,
        weak_areas: &[String],
    ) -> Result<String>;
}

pub struct OpenAiQuestioner {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiQuestioner {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    async fn complete(&self, prompt: String) -> Result<String> {
        debug!(model = %self.model, "requesting chat completion");
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.7
        });

        let resp = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<LlmResponse>()
            .await?;

        let answer = &resp
            .choices
            .first()
            .ok_or_else(|| anyhow::anyhow!("No response from LLM"))?
            .message
            .content;
        Ok(answer.trim().to_string())
    }
}

#[async_trait]
impl Questioner for OpenAiQuestioner {
    async fn generate_questions(&self, resume_context: &str, role: &str) -> Result<Vec<String>> {
        let answer = self.complete(batch_prompt(resume_context, role)).await?;
        parse_question_list(&answer)
    }

    async fn next_question(
        &self,
        resume_context: &str,
        role: &str,
        prior_questions: &[String],
    ) -> Result<String> {
        self.complete(next_question_prompt(resume_context, role, prior_questions))
            .await
    }

    async fn followup_question(
        &self,
        resume_context: &str,
        role: &str,
        last_question: &str,
        weak_areas: &[String],
    ) -> Result<String> {
        self.complete(followup_prompt(
            resume_context,
            role,
            last_question,
            weak_areas,
        ))
        .await
    }
}

fn batch_prompt(resume_context: &str, role: &str) -> String {
    format!(
        r#"You are a technical interviewer for the role of "{role}". Below is the candidate's resume:
---
{resume_context}
---
Write 5 interview questions tailored to this resume and role. Respond with a STRICT JSON array of strings, one question per element, and nothing else."#
    )
}

fn next_question_prompt(resume_context: &str, role: &str, prior_questions: &[String]) -> String {
    let asked = if prior_questions.is_empty() {
        "(none yet)".to_string()
    } else {
        prior_questions.join("\n- ")
    };
    format!(
        r#"You are a technical interviewer for the role of "{role}". Below is the candidate's resume:
---
{resume_context}
---
Questions already asked:
- {asked}

Write the next interview question. It must cover ground not already asked. Respond with the question text only, no numbering or preamble."#
    )
}

fn followup_prompt(
    resume_context: &str,
    role: &str,
    last_question: &str,
    weak_areas: &[String],
) -> String {
    let weak = if weak_areas.is_empty() {
        "the answer overall".to_string()
    } else {
        weak_areas.join(", ")
    };
    format!(
        r#"You are a technical interviewer for the role of "{role}". Below is the candidate's resume:
---
{resume_context}
---
The candidate just gave an unconvincing answer to: "{last_question}"
Identified weak areas: {weak}.

Write one clarifying follow-up question probing those weak areas. Respond with the question text only, no numbering or preamble."#
    )
}

/// Parses a JSON array of strings out of the model output, tolerating a
/// markdown code fence around it.
fn parse_question_list(answer: &str) -> Result<Vec<String>> {
    let trimmed = answer.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();
    let questions: Vec<String> = serde_json::from_str(body)
        .map_err(|e| anyhow::anyhow!("Failed to parse question list from LLM: {e}"))?;
    if questions.is_empty() {
        return Err(anyhow::anyhow!("LLM returned an empty question list"));
    }
    Ok(questions)
}
