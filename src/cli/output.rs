use anyhow::Result;
use pagetable::ActionLog;
use serde_json::json;

/// Print one line per action, e.g. `edit 3`.
pub(crate) fn print_plain(log: &ActionLog) {
	print!("{}", format_log_plain(log));
}

pub(crate) fn format_log_plain(log: &ActionLog) -> String {
	if log.is_empty() {
		return "No actions\n".to_string();
	}
	log.iter().map(|intent| format!("{intent}\n")).collect()
}

/// Format the action log as a JSON document.
pub(crate) fn format_log_json(log: &ActionLog) -> Result<String> {
	let payload = json!({
		"count": log.len(),
		"actions": log,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(log: &ActionLog) -> Result<()> {
	println!("{}", format_log_json(log)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use pagetable_core::RowIntent;
	use serde_json::Value;

	use super::*;

	fn sample_log() -> ActionLog {
		let mut log = ActionLog::new();
		log.push(RowIntent::edit(3));
		log.push(RowIntent::delete(7));
		log
	}

	#[test]
	fn plain_output_lists_each_action() {
		insta::assert_snapshot!(format_log_plain(&sample_log()).trim_end(), @r"
		edit 3
		delete 7
		");
		assert_eq!(format_log_plain(&ActionLog::new()), "No actions\n");
	}

	#[test]
	fn json_output_carries_action_and_id() {
		let json = format_log_json(&sample_log()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["count"], 2);
		assert_eq!(value["actions"][0]["action"], "edit");
		assert_eq!(value["actions"][1]["id"], 7);
	}
}
