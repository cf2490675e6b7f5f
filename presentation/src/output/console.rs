//! Console formatting for tools, calls, and results

use colored::Colorize;
use toolcall_domain::{CallDescriptor, ToolDescriptor, ToolError};

/// Formats tool activity for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the tool list shown by `--list-tools` and `/tools`
    pub fn format_tool_list(tools: &[&ToolDescriptor]) -> String {
        if tools.is_empty() {
            return format!("{}\n", "No tools registered.".dimmed());
        }

        let mut output = String::new();
        output.push_str(&Self::section_header("Available tools"));

        for tool in tools {
            output.push_str(&format!(
                "\n{}\n{}\n",
                tool.name.yellow().bold(),
                Self::indent(&tool.description, "  ")
            ));
            for param in &tool.parameters {
                let required = if param.required {
                    "required".red().to_string()
                } else {
                    "optional".dimmed().to_string()
                };
                output.push_str(&format!(
                    "    {} ({}, {}): {}\n",
                    param.name.cyan(),
                    param.param_type,
                    required,
                    param.description
                ));
            }
        }

        output
    }

    /// Format a call as `Name(key="value", ...)`
    pub fn format_call(call: &CallDescriptor) -> String {
        let params = call
            .parameters
            .iter()
            .map(|p| format!("{}={:?}", p.parameter_name, p.parameter_value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", call.function_name, params)
    }

    pub fn format_tool_call(call: &CallDescriptor) -> String {
        format!("{} {}", "->".cyan(), Self::format_call(call).bold())
    }

    pub fn format_tool_result(name: &str, result: &str) -> String {
        format!(
            "{}\n{}",
            format!("── {} ──", name).green().bold(),
            result
        )
    }

    pub fn format_tool_error(name: &str, error: &ToolError) -> String {
        format!(
            "{} {} {}",
            "x".red(),
            format!("{} failed:", name).red().bold(),
            error
        )
    }

    pub fn format_missing_parameters(name: &str, missing: &[String]) -> String {
        format!(
            "{} {} {}",
            "x".red(),
            format!("{} is missing required parameters:", name).red().bold(),
            missing.join(", ")
        )
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
