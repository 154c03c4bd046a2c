//! Prompt templates for the readiness assessment

/// Upper bound on report length requested from the model
pub const MAX_REPORT_WORDS: usize = 1000;

/// Report headings, in the order the model must emit them
pub const REPORT_SECTIONS: [&str; 5] = [
    "Overall Score",
    "Your Core Identity: User Mindset vs. Builder Mindset",
    "Your Collaboration Maturity: Which of the Five Stages?",
    "Your Advancement Path: From Rower to Navigator",
    "A Closing Question",
];

/// Framework vocabulary the report has to reuse
pub const FRAMEWORK_TERMS: [&str; 5] = [
    "Builder",
    "Context Curation",
    "Context Architect",
    "Divide and Conquer",
    "long-tail productivity problems",
];

/// Fixed text blocks of the assessment prompt
pub struct AssessmentPromptTemplate;

impl AssessmentPromptTemplate {
    /// System prompt: analyst persona and style contract
    pub fn system() -> &'static str {
        r#"You are a senior AI strategy advisor and course teaching assistant with a deep understanding of the Builder mindset and the five-stage AI collaboration framework.

How you work:

Think with depth and independence. Before answering a question or doing a task, ask yourself why it is being asked and whether there is a hidden reason behind it. A task often sits inside a larger context that already carries some assumptions. Work out what those assumptions might be, and whether the question itself is the best one to ask. If breaking an assumption leads to a better question, pursue the insight it offers at a more fundamental level.

Before answering, decide what success looks like for the answer itself: what standard the content of your response must meet to truly serve the need. Then build your answer against that standard.

You still have to deliver an answer. Our relationship is collaborative, though. Your goal is not to force a definitive answer in a single turn, which would push you to make arbitrary assumptions where things are unclear, but to work toward the answer step by step, and sometimes toward a better way of asking the question. Your task is to offer insight, not merely to follow instructions.

STYLE:
- Do not overuse bullet points; keep them at the top level only. Prefer natural paragraphs.
- Do not use quotation marks of any kind.
- Keep a rational, restrained tone. Show expertise through depth of thought rather than grand vocabulary.
- Avoid literary metaphors.
- Keep an empowering, guiding tone rather than a judgmental one."#
    }

    /// Theory section: orientation axis and the five maturity stages
    pub fn framework() -> &'static str {
        r#"# Core Framework

Identity model: people fall into two mindsets. User: passively consumes tools, expects ready-made GUI solutions, and blames the tool when things go wrong. Builder: actively solves problems, treats AI as a computing interface driven by natural language, works on long-tail productivity problems, and believes in learning by building.

Collaboration maturity model: working with AI progresses through five stages.

Stage 1, Black Box: treats AI as an oracle and gives it no context. Core skill: stating the goal clearly. Failure mode: accepting or rejecting output wholesale.

Stage 2, Intern: corrects the AI over a long conversation. Core skill: Context Curation. Failure mode: a long correction thread that pollutes the context.

Stage 3, Teammate: collaborates inside an AI-native environment, acting as a Context Architect. Core skill: creating machine-readable knowledge assets. Failure mode: assets that only a human can read.

Stage 4, Project Manager: takes on large tasks that fail when a single context saturates. Core skill: Divide and Conquer. Failure mode: pushing the whole task through one overloaded conversation.

Stage 5, Co-creator: explores open-ended strategic questions together with the AI, where human judgment and domain expertise become the most important context. Core skill: framing problems and judging outcomes. Failure mode: delegating judgment that should stay human."#
    }

    /// Report skeleton the model must follow
    pub fn report_structure() -> String {
        let [score, identity, maturity, path, closing] = REPORT_SECTIONS;
        format!(
            r#"# Report Structure and Instructions

Write a Markdown report with the following sections.

## {score}

Start with an overall score from 0 to 100 that weighs both the Builder mindset and the collaboration maturity dimensions. The score should reflect the respondent's current overall level while also accounting for growth potential. After the score, explain its basis in one sentence.

## {identity}

Based on the answers to questions 1 to 3, determine precisely where the respondent's core identity leans. Avoid a simple binary; a mixed state may be described. Look beneath the answers for the thinking patterns and implicit assumptions behind them.

## {maturity}

Based on the answers to questions 4 to 6, determine which collaboration stage fits the respondent best. Name the skills they have mastered and the typical bottleneck they face. Reason about the logic behind the answers, not just the surface choice.

## {path}

Combining the identity and stage diagnoses, give one or two concrete, actionable recommendations tied closely to the course ideas. The recommendations should break the respondent's current assumptions and offer insight from a more fundamental angle.

## {closing}

End the report with one open-ended question that invites the respondent to begin the Builder journey and to think about a deeper problem."#
        )
    }

    /// Output rules appended after the report skeleton
    pub fn rules() -> String {
        format!(
            r#"# Rules

The report must naturally use the course vocabulary, such as {terms}.

Do not use quotation marks of any kind.

Keep the whole report within {MAX_REPORT_WORDS} words.

Output the report body directly, with no preamble or closing remarks."#,
            terms = FRAMEWORK_TERMS.join(", ")
        )
    }

    /// Assemble the user prompt around already-serialized answers
    pub fn user(serialized_answers: &str) -> String {
        format!(
            "{framework}\n\n# Respondent Answers\n\nThe respondent's answers are as follows (JSON):\n{answers}\n\n{structure}\n\n{rules}",
            framework = Self::framework(),
            answers = serialized_answers,
            structure = Self::report_structure(),
            rules = Self::rules(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_has_style_contract() {
        let system = AssessmentPromptTemplate::system();
        assert!(system.contains("STYLE:"));
        assert!(system.contains("Do not use quotation marks"));
        assert!(system.contains("top level only"));
    }

    #[test]
    fn test_framework_names_all_stages() {
        let framework = AssessmentPromptTemplate::framework();
        for stage in ["Black Box", "Intern", "Teammate", "Project Manager", "Co-creator"] {
            assert!(framework.contains(stage), "missing stage {stage}");
        }

        let stages: Vec<&str> = framework
            .lines()
            .filter(|line| line.starts_with("Stage "))
            .collect();
        assert_eq!(stages.len(), 5);
        for line in stages {
            assert_eq!(line.matches("Core skill:").count(), 1, "{line}");
            assert_eq!(line.matches("Failure mode:").count(), 1, "{line}");
        }
        assert!(framework.contains("User:"));
        assert!(framework.contains("Builder:"));
    }

    #[test]
    fn test_report_structure_lists_sections_in_order() {
        let structure = AssessmentPromptTemplate::report_structure();
        let positions: Vec<usize> = REPORT_SECTIONS
            .iter()
            .map(|s| structure.find(&format!("## {s}")).expect("section heading"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rules_mention_budget_and_terms() {
        let rules = AssessmentPromptTemplate::rules();
        assert!(rules.contains("1000 words"));
        for term in FRAMEWORK_TERMS {
            assert!(rules.contains(term));
        }
    }

    #[test]
    fn test_user_prompt_section_order() {
        let user = AssessmentPromptTemplate::user("{\"Q1\": \"A\"}");
        let framework = user.find("# Core Framework").unwrap();
        let answers = user.find("{\"Q1\": \"A\"}").unwrap();
        let structure = user.find("# Report Structure").unwrap();
        let rules = user.find("# Rules").unwrap();
        assert!(framework < answers && answers < structure && structure < rules);
    }
}
