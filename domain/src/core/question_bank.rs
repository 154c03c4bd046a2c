//! The fixed survey catalog.
//!
//! [`QuestionBank::canonical()`] builds the ten-question assessment used in
//! production. The bank is constructed once at startup and shared read-only.

use super::question::Question;
use serde::Serialize;

/// Ordered, immutable collection of survey questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from an ordered list of questions
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The ten-question AI readiness assessment
    pub fn canonical() -> Self {
        Self::new(vec![
            Question::new(
                "Q1",
                "当一个重复性的手动任务（例如，每周整理数据并发送邮件）让你感到厌烦时，你脑中首先出现的想法更接近于？",
                [
                    ("A", "Focus on manual completion with better concentration"),
                    ("B", "Search for an existing paid tool to solve it permanently"),
                    ("C", "Describe my needs to AI in natural language to generate automation code"),
                    ("D", "Rethink the workflow fundamentally to eliminate this task"),
                ],
            ),
            Question::new(
                "Q2",
                "当你尝试使用AI辅助工作，但它的产出不准确甚至胡说八道时，你的反应是？",
                [
                    ("A", "Confirm AI is unreliable and use it cautiously in serious work"),
                    ("B", "Treat it like an intern, adjust instructions and try to teach it"),
                    ("C", "Recognize insufficient context and provide relevant background materials"),
                    ("D", "Reflect on workflow design and reconsider human-AI collaboration approach"),
                ],
            ),
            Question::new(
                "Q3",
                "公司引入了一个全新的内部知识库，但信息繁杂。你希望如何利用它？",
                [
                    ("A", "Wait for IT to provide a search interface or navigation"),
                    ("B", "Read through everything myself to build a mental index"),
                    ("C", "Consider connecting the knowledge base API with AI to build a custom Q&A bot"),
                    ("D", "Proactively add structured data to make content machine-readable for future AI interaction"),
                ],
            ),
            Question::new(
                "Q4",
                "你需要AI帮你写一段用于数据分析的代码。在与AI的交互中，哪种情况最符合你的现状？",
                [
                    ("A", "Tell AI the goal directly and see what it produces"),
                    ("B", "Provide the data schema first, then specify analysis requirements"),
                    ("C", "Make iterative corrections in a long conversation until it's right"),
                    ("D", "Stop and reorganize all corrections into a clear, complete new instruction"),
                ],
            ),
            Question::new(
                "Q5",
                "你需要调研十个竞争对手的最新动态并形成报告。你会如何借助AI？",
                [
                    ("A", "Ask AI one broad question to research all ten companies"),
                    ("B", "Have AI list companies, then research each separately and summarize myself"),
                    ("C", "Design a workflow where a manager AI splits tasks among analyst AIs"),
                    ("D", "Co-define scope and standards, then have AI execute step-by-step with checkpoints"),
                ],
            ),
            Question::new(
                "Q6",
                "对你而言，AI原生的工作环境意味着什么？",
                [
                    ("A", "AI assistant buttons embedded in all my software"),
                    ("B", "Skillfully switching between different AI tools for complex tasks"),
                    ("C", "Working in an AI-native environment where AI can read and write my files"),
                    ("D", "My work outputs are structured knowledge assets that other AIs can call"),
                ],
            ),
            Question::new(
                "Q7",
                "忘掉旧经验对你来说，更像是一种？",
                [
                    ("A", "Threat"),
                    ("B", "Challenge"),
                    ("C", "Liberation"),
                    ("D", "Opportunity"),
                ],
            ),
            Question::new(
                "Q8",
                "你认为未来最有价值的技能是？",
                [
                    ("A", "Mastering a specific AI tool"),
                    ("B", "Ability to quickly learn any new tool"),
                    ("C", "Critical thinking to define problems and judge outcomes"),
                    ("D", "Designing and optimizing human-AI collaboration systems"),
                ],
            ),
            Question::new(
                "Q9",
                "想象你被指派领导一个重要但定义模糊的项目，例如利用AI提升客户满意度。在项目启动的第一周，你的工作重心会是什么？",
                [
                    ("A", "Start experimenting immediately with mainstream AI tools to find quick wins"),
                    ("B", "Break down the goal into detailed technical tasks with a comprehensive timeline"),
                    ("C", "Spend most time interviewing stakeholders to precisely define success metrics and pain points"),
                    ("D", "Design a sustainable system for AI to continuously monitor and alert, with me making strategic decisions"),
                ],
            ),
            Question::new(
                "Q10",
                "当您想象自己已真正掌握与AI的协作时，以下哪种情景最能代表您职业生涯中的终极胜利？",
                [
                    ("A", "Maximum efficiency: completing days of work in minutes, becoming the undisputed efficiency champion"),
                    ("B", "Extended intelligence: AI as my co-pilot for brainstorming and discovering hidden connections"),
                    ("C", "Creative power: building custom micro-apps or automations to solve unique long-tail problems"),
                    ("D", "Knowledge authority: becoming the AI evangelist who guides and empowers the team"),
                ],
            ),
        ])
    }

    /// Questions in presentation order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Whether the bank contains a question with this id
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Minimum number of answers accepted for analysis.
    ///
    /// One omission is tolerated: `len() - 1`.
    pub fn required_answers(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::OPTION_KEYS;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_has_ten_questions_in_order() {
        let bank = QuestionBank::canonical();
        let ids: Vec<&str> = bank.questions().iter().map(|q| q.id()).collect();
        assert_eq!(
            ids,
            vec!["Q1", "Q2", "Q3", "Q4", "Q5", "Q6", "Q7", "Q8", "Q9", "Q10"]
        );
    }

    #[test]
    fn test_canonical_ids_are_unique() {
        let bank = QuestionBank::canonical();
        let unique: HashSet<&str> = bank.questions().iter().map(|q| q.id()).collect();
        assert_eq!(unique.len(), bank.len());
    }

    #[test]
    fn test_every_question_has_options_a_to_d() {
        for question in QuestionBank::canonical().questions() {
            let keys: Vec<&str> = question.options().keys().map(String::as_str).collect();
            assert_eq!(keys, OPTION_KEYS, "bad options on {}", question.id());
            assert!(question.options().values().all(|v| !v.trim().is_empty()));
            assert!(!question.text().trim().is_empty());
        }
    }

    #[test]
    fn test_lookup() {
        let bank = QuestionBank::canonical();
        assert_eq!(bank.get("Q7").unwrap().option_text("C"), Some("Liberation"));
        assert!(bank.contains("Q10"));
        assert!(!bank.contains("Q11"));
    }

    #[test]
    fn test_question_texts_match_published_survey() {
        let bank = QuestionBank::canonical();
        assert_eq!(
            bank.get("Q1").unwrap().text(),
            "当一个重复性的手动任务（例如，每周整理数据并发送邮件）让你感到厌烦时，你脑中首先出现的想法更接近于？"
        );
        assert_eq!(bank.get("Q7").unwrap().text(), "忘掉旧经验对你来说，更像是一种？");
        assert_eq!(
            bank.get("Q10").unwrap().text(),
            "当您想象自己已真正掌握与AI的协作时，以下哪种情景最能代表您职业生涯中的终极胜利？"
        );
    }

    #[test]
    fn test_required_answers_allows_one_omission() {
        assert_eq!(QuestionBank::canonical().required_answers(), 9);
        assert_eq!(QuestionBank::new(vec![]).required_answers(), 0);
    }
}
