//! Grounding context and system instruction builder.
//!
//! The Content Store is serialized into a compact JSON document and embedded
//! verbatim into the system instruction of every chat request, so answers
//! stay consistent with the site owner's real background.
//!
//! Layout of the instruction:
//! ```text
//! You are a friendly and professional AI portfolio assistant for {name}.
//! Your goal is to answer questions ... based strictly on the provided context.
//!
//! Context Data:
//! {context_json}
//!
//! Guidelines:
//! - ...
//! ```

use serde::Serialize;

use folio_types::content::{Education, ExperienceItem, Portfolio, Profile, Project, SkillCategory};

/// Serialized view of the Content Store handed to the model.
///
/// Borrows from the portfolio; built fresh for every request and never
/// mutated. Social links are left out: the contact email in the profile is
/// what the model is told to hand out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextDocument<'a> {
    pub personal_info: &'a Profile,
    pub skills: &'a [SkillCategory],
    pub experience: &'a [ExperienceItem],
    pub projects: &'a [Project],
    pub education: &'a [Education],
}

impl<'a> ContextDocument<'a> {
    pub fn from_portfolio(portfolio: &'a Portfolio) -> Self {
        Self {
            personal_info: &portfolio.profile,
            skills: &portfolio.skills,
            experience: &portfolio.experience,
            projects: &portfolio.projects,
            education: &portfolio.education,
        }
    }

    /// Compact JSON rendering used as grounding text.
    pub fn to_json(&self) -> String {
        // Only plain strings, integers and vectors: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Builds the system instruction sent alongside every user prompt.
pub struct SystemInstruction;

impl SystemInstruction {
    /// Behavioural guidelines appended after the context data.
    pub const GUIDELINES: [&'static str; 5] = [
        "Answer in the first person (as if you are representing {name}) or as a helpful assistant.",
        "Keep responses concise, engaging, and relevant.",
        "If the user asks for contact info, provide the email from the context.",
        "If you don't know the answer based on the context, politely say you don't have that information.",
        "Do not make up facts.",
    ];

    pub fn build(portfolio: &Portfolio) -> String {
        let name = portfolio.profile.name.as_str();
        let context = ContextDocument::from_portfolio(portfolio).to_json();

        let mut sections = Vec::with_capacity(3);

        sections.push(format!(
            "You are a friendly and professional AI portfolio assistant for {name}.\n\
             Your goal is to answer questions about {name}'s professional background, \
             skills, and projects based strictly on the provided context."
        ));

        sections.push(format!("Context Data:\n{context}"));

        let guidelines = Self::GUIDELINES
            .iter()
            .map(|g| format!("- {}", g.replace("{name}", name)))
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("Guidelines:\n{guidelines}"));

        sections.join("\n\n")
    }
}
