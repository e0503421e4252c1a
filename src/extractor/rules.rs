//! The ordered rule catalogs driving message cleaning.
//!
//! Each rule pairs a compiled pattern with an action: delete the whole
//! match, or replace it with one of its capture groups. Removals that are
//! bounded by a blank line capture that boundary and keep it, so deleting
//! a block never glues two unrelated paragraphs together.
//!
//! Catalog order is part of the contract: later rules run over text the
//! earlier rules have already rewritten. The catalogs are built once on
//! first use and never mutated, so they are safe to share across threads.

use std::sync::LazyLock;

use regex::Regex;

/// What to do with a matched span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Remove the entire match.
    Delete,
    /// Replace the match with the given capture group.
    KeepGroup(usize),
}

/// A named text-rewriting rule.
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    action: RuleAction,
}

impl Rule {
    fn delete(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: compile(name, pattern),
            action: RuleAction::Delete,
        }
    }

    fn keep_group(name: &'static str, pattern: &str, group: usize) -> Self {
        Self {
            name,
            pattern: compile(name, pattern),
            action: RuleAction::KeepGroup(group),
        }
    }

    /// Rule name, for logging and auditing.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The action this rule performs on a match.
    pub fn action(&self) -> RuleAction {
        self.action
    }

    /// Apply the rule to `text`, rewriting every match.
    pub fn apply(&self, text: &str) -> String {
        match self.action {
            RuleAction::Delete => self.pattern.replace_all(text, "").into_owned(),
            RuleAction::KeepGroup(group) => {
                let replacement = format!("${{{}}}", group);
                self.pattern
                    .replace_all(text, replacement.as_str())
                    .into_owned()
            }
        }
    }

}

fn compile(name: &str, pattern: &str) -> Regex {
    // Patterns are static literals; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern for rule '{}': {}", name, e))
}

// Pattern sources, shared between the role catalogs and the thinking subset.
// Blank-line-bounded removals capture the boundary as group 1 and keep it.
const ENVIRONMENT_DETAILS: &str = r"(?s)<environment_details>.*?</environment_details>";
const TOOL_RESULT: &str = r"(?s)\[[^\]]+\] Result:.*?(\n\n|\z)";
const FILE_CONTENT: &str = r#"(?s)<file_content path=".*?">.*?</file_content>"#;
const TOOL_USE_MARKER: &str = r"(?s)\[Tool Use: .*?\].*?(\n\n|\z)";
const TOOL_RESULT_MARKER: &str = r"(?s)\[Tool(?:\s\(Error\))?\]\n.*?(\n\n|\z)";
const IMAGE_MARKER: &str = r"\[Image\]";
const CODE_FENCE: &str = r"(?s)```(?:\w+)?\n.*?```";
const FILE_LISTING: &str =
    r"(?:Directory\s+)?(?:File|Listing)[^\n]*?\n(?:-+\n)?(?:(?:\s*[-\w./\\]+\s*\n)+)";
const PATH_REFERENCE: &str = r#"(?:in|from|at|path:|file:)\s+["'`][/\\]?[\w\-/\\.]+["'`]"#;
const LINE_NUMBER_PREFIX: &str = r"(?m)^\s*\d+ \|";
const SYSTEM_ERROR_BOILERPLATE: &str =
    r"(?s)\[ERROR\].*?ensure proper parsing and execution.*?Next Steps";

/// Matches a `<thinking>` section; the inner text is group 1.
///
/// Handled outside the catalogs: the cleaner rewrites the captured inner
/// text with [`thinking_rules`] while keeping the tags themselves.
pub static RE_THINKING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<thinking>(.*?)</thinking>").unwrap());

/// The conventional `---` separator trailing a segmented turn.
///
/// Segmentation slices raw spans between speaker headers, so the span of
/// every non-final turn still carries the separator line that preceded the
/// next header. Both role pipelines strip it before any other rule runs.
pub fn separator_rule() -> &'static Rule {
    static RULE: LazyLock<Rule> =
        LazyLock::new(|| Rule::delete("turn_separator", r"(?:\A|\s*\n)[ \t]*---\s*\z"));
    &RULE
}

/// Ordered catalog for user-role text.
///
/// Structural containers go first, then the content-preserving unwraps
/// (task, feedback, free-form message, answer), then the shared noise and
/// heuristic path/listing removals.
pub fn user_rules() -> &'static [Rule] {
    static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
        vec![
            Rule::delete("environment_details", ENVIRONMENT_DETAILS),
            Rule::keep_group("tool_result", TOOL_RESULT, 1),
            Rule::delete("file_content", FILE_CONTENT),
            Rule::keep_group("tool_use_marker", TOOL_USE_MARKER, 1),
            Rule::keep_group("tool_result_marker", TOOL_RESULT_MARKER, 1),
            Rule::delete("image_marker", IMAGE_MARKER),
            Rule::keep_group("task", r"(?s)<task>(.*?)</task>", 1),
            Rule::keep_group("feedback", r"(?s)<feedback>(.*?)</feedback>", 1),
            Rule::keep_group("user_message", r"(?s)<user_message>(.*?)</user_message>", 1),
            Rule::keep_group("answer", r"(?s)<answer>(.*?)</answer>", 1),
            Rule::delete("line_number_prefix", LINE_NUMBER_PREFIX),
            Rule::delete("system_error_boilerplate", SYSTEM_ERROR_BOILERPLATE),
            Rule::delete("code_fence", CODE_FENCE),
            Rule::delete("file_listing", FILE_LISTING),
            Rule::delete("path_reference", PATH_REFERENCE),
        ]
    });
    &RULES
}

/// Ordered catalog for assistant-role text.
///
/// Runs after thinking sections have been rewritten in place. The
/// completion wrapper is unwrapped to its declared result, then every tool
/// tag is removed wholesale - except `ask_followup_question`, which keeps
/// its embedded question. The exception is an ordinary catalog entry with a
/// `KeepGroup` action, not a special case in the cleaner.
pub fn assistant_rules() -> &'static [Rule] {
    static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
        vec![
            Rule::keep_group(
                "attempt_completion",
                r"(?s)<attempt_completion>.*?<result>(.*?)</result>.*?</attempt_completion>",
                1,
            ),
            Rule::delete("write_to_file", r"(?s)<write_to_file>.*?</write_to_file>"),
            Rule::delete("apply_diff", r"(?s)<apply_diff>.*?</apply_diff>"),
            Rule::delete("execute_command", r"(?s)<execute_command>.*?</execute_command>"),
            Rule::delete("browser_action", r"(?s)<browser_action>.*?</browser_action>"),
            Rule::delete("switch_mode", r"(?s)<switch_mode>.*?</switch_mode>"),
            Rule::delete("use_mcp_tool", r"(?s)<use_mcp_tool>.*?</use_mcp_tool>"),
            Rule::delete(
                "access_mcp_resource",
                r"(?s)<access_mcp_resource>.*?</access_mcp_resource>",
            ),
            Rule::delete("insert_content", r"(?s)<insert_content>.*?</insert_content>\s*"),
            Rule::delete(
                "search_and_replace",
                r"(?s)<search_and_replace>.*?</search_and_replace>\s*",
            ),
            Rule::keep_group(
                "ask_followup_question",
                r"(?s)<ask_followup_question>\s*<question>(.*?)</question>.*?</ask_followup_question>",
                1,
            ),
            Rule::delete("read_file", r"(?s)<read_file>.*?</read_file>\s*"),
            Rule::delete("list_files", r"(?s)<list_files>.*?</list_files>\s*"),
            Rule::delete("search_files", r"(?s)<search_files>.*?</search_files>\s*"),
            Rule::delete(
                "list_code_definition_names",
                r"(?s)<list_code_definition_names>.*?</list_code_definition_names>\s*",
            ),
            Rule::keep_group("tool_use_marker", TOOL_USE_MARKER, 1),
            Rule::keep_group("tool_result_marker", TOOL_RESULT_MARKER, 1),
            Rule::delete("image_marker", IMAGE_MARKER),
            Rule::delete("file_content", FILE_CONTENT),
            Rule::delete("line_number_prefix", LINE_NUMBER_PREFIX),
            Rule::delete("system_error_boilerplate", SYSTEM_ERROR_BOILERPLATE),
            Rule::delete("code_fence", CODE_FENCE),
            Rule::delete("file_listing", FILE_LISTING),
            Rule::delete("path_reference", PATH_REFERENCE),
        ]
    });
    &RULES
}

/// Bounded subset applied to the inside of thinking sections.
///
/// Deliberately not the full assistant catalog: re-entering the outer list
/// would strip the thinking tags themselves.
pub fn thinking_rules() -> &'static [Rule] {
    static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
        vec![
            Rule::delete("file_content", FILE_CONTENT),
            Rule::delete("code_fence", CODE_FENCE),
            Rule::delete("path_reference", PATH_REFERENCE),
        ]
    });
    &RULES
}
