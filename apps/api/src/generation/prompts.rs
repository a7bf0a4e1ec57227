// All LLM prompt constants for curriculum generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System instruction sent with every generation request.
pub const CURRICULUM_SYSTEM: &str = "You are a world-class curriculum developer for The Bible Project. \
    You prioritize literary context, historical background, and Jesus-centered theology. \
    You write full content that a leader could read and teach from directly, not just bullet points.";

/// Curriculum prompt template.
/// Replace: {duration}, {topic}, {audience}, {tone}
pub const CURRICULUM_PROMPT_TEMPLATE: &str = r#"Create a comprehensive, print-ready {duration}-week youth ministry curriculum series about "{topic}".
Target Audience: {audience}.
Tone: {tone}.

For each week, provide a FULL lesson plan (not just an outline) including:
1. Creative Title & Scripture Reference.
2. Key Verse (NIV or ESV).
3. Learning Objective (Clear outcome).
4. Main Idea (The 'Big Idea' in one sentence).
5. The Hook: A full, engaging opening story, cultural analogy, or interaction (approx 100-150 words) that sets up the tension.
6. Teaching Guide: 3 distinct teaching points. For EACH point, provide a detailed paragraph (approx 100-150 words) of teaching script/commentary. It should be theologically rich, explaining the text and connecting to the gospel.
7. Discussion Questions: 5 thought-provoking questions (Observation -> Interpretation -> Application).
8. Application Challenge: A specific weekly practice.
9. Activity: A game or object lesson that visibly demonstrates the truth.

Style Guide:
- Intellectual and respectful of the student's capacity.
- Narrative-driven (fit this topic into the larger story of the Bible).
- Avoid Christian jargon where possible; use fresh language.
- Formatting must be clean and structured."#;
