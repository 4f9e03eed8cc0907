use serde::Serialize;

use kana_core::field::{convert_input_for_field, FieldType};
use kana_core::romaji::{compose, convert_with, ConversionResult, ConvertOptions, TargetScript};
use kana_core::script::{detect_script, detect_script_ignoring_marks, ScriptType};

#[derive(Debug, Serialize)]
struct DetectOutput<'a> {
    text: &'a str,
    script: ScriptType,
}

pub fn convert_cmd(text: &str, script: TargetScript, opts: &ConvertOptions, json: bool) {
    let result = convert_with(text, script, opts);
    print!("{}", format_result(&result, json));
}

pub fn field_cmd(input: &str, field: FieldType, prefer: Option<TargetScript>, json: bool) {
    let mut field_settings = kana_core::settings::settings().field.clone();
    if prefer.is_some() {
        field_settings.preferred_script = prefer;
    }
    let result = convert_input_for_field(input, field, Some(&field_settings));
    print!("{}", format_result(&result, json));
}

pub fn detect_cmd(text: &str, ignore_marks: bool, json: bool) {
    print!("{}", format_detect(text, ignore_marks, json));
}

pub fn compose_cmd(pending: &str, force: bool) {
    let r = compose("", pending, force);
    println!("composed: {}", r.composed);
    println!("pending:  {}", r.pending);
}

pub fn format_result(result: &ConversionResult, json: bool) -> String {
    if json {
        return to_json_line(result);
    }
    let mut out = format!("{}\n", result.converted);
    for err in &result.errors {
        out.push_str(&format!("warning: {err}\n"));
    }
    out
}

pub fn format_detect(text: &str, ignore_marks: bool, json: bool) -> String {
    let script = if ignore_marks {
        detect_script_ignoring_marks(text)
    } else {
        detect_script(text)
    };
    if json {
        to_json_line(&DetectOutput { text, script })
    } else {
        format!("{script}\n")
    }
}

fn to_json_line<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(s) => format!("{s}\n"),
        Err(e) => format!("{{\"error\":{:?}}}\n", e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kana_core::field::FieldSettings;

    #[test]
    fn result_text_lists_warnings() {
        let r = convert_with("ka!", TargetScript::Hiragana, &ConvertOptions::default());
        assert_eq!(
            format_result(&r, false),
            "か!\nwarning: unmapped character '!' at position 1\n"
        );
    }

    #[test]
    fn result_json_is_one_line() {
        let r = convert_with("kyo", TargetScript::Katakana, &ConvertOptions::default());
        assert_eq!(
            format_result(&r, true),
            "{\"original\":\"kyo\",\"converted\":\"キョ\",\"isValid\":true}\n"
        );
    }

    #[test]
    fn detect_output() {
        assert_eq!(format_detect("今日は", false, false), "mixed\n");
        assert_eq!(format_detect("らーめん", false, false), "mixed\n");
        assert_eq!(format_detect("らーめん", true, false), "hiragana\n");
        assert_eq!(
            format_detect("カナ", false, true),
            "{\"text\":\"カナ\",\"script\":\"katakana\"}\n"
        );
    }

    #[test]
    fn field_settings_override() {
        let prefs = FieldSettings {
            preferred_script: Some(TargetScript::Hiragana),
            strict_romaji: false,
        };
        let r = convert_input_for_field("neko", FieldType::Romaji, Some(&prefs));
        assert_eq!(format_result(&r, false), "ねこ\n");
    }
}
