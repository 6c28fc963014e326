//! Prompt templates sent to the completer.

use repolens_core::Chunk;

pub const SUMMARY_SEPARATOR: &str = "\n\n---\n\n";

pub fn chunk_prompt(chunk: &Chunk) -> String {
    format!(
        "Analyze this part of the codebase. Focus on key components, patterns, and functionality. Be concise:\n\n{}",
        chunk
    )
}

pub fn reduce_prompt(summaries: &[String]) -> String {
    format!(
        "Combine these analysis parts into a concise overview focusing on key components and architecture:\n\n{}",
        summaries.join(SUMMARY_SEPARATOR)
    )
}

pub fn quick_prompt(dir_structure: &str, languages: &str) -> String {
    format!(
        "Analyze this codebase and provide a quick overview:

Directory Structure:
{dir_structure}

Languages:
{languages}

Please provide:
1. A brief description of what this codebase likely does
2. Main components and their purpose (based on directory structure)
3. Technologies used (based on file types and languages)
4. Setup/build system (based on manifest files)

Focus on high-level understanding and keep it concise."
    )
}

pub fn explain_prompt(filename: &str, content: &str) -> String {
    format!(
        "Explain the following file in detail:

Filename: {filename}

Content:
{content}

Please provide:
1. What this file does
2. Its main purpose in the codebase
3. Key components/functions and their roles
4. Any important patterns or considerations

Keep the explanation clear and focused on the most important aspects."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_prompt_joins_in_order() {
        let prompt = reduce_prompt(&["one".to_string(), "two".to_string()]);
        assert!(prompt.ends_with(":\n\none\n\n---\n\ntwo"));
    }

    #[test]
    fn test_quick_prompt_embeds_inputs() {
        let prompt = quick_prompt(".\n└── src\n", "Rust (100.0%)");
        assert!(prompt.contains("Directory Structure:\n.\n└── src\n\n\nLanguages:\nRust (100.0%)\n"));
    }

    #[test]
    fn test_chunk_prompt_wraps_chunk() {
        let prompt = chunk_prompt(&Chunk::new("File: a\n\nx\n\n"));
        assert!(prompt.starts_with("Analyze this part of the codebase."));
        assert!(prompt.ends_with("Be concise:\n\nFile: a\n\nx\n\n"));
    }
}
