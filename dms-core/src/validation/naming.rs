use crate::model::TRASH_PREFIX;
use crate::validation::*;

const FORBIDDEN_CHARS: &str = "<>:\"/\\|?*";

const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Validate a folder or file display name (§4.5 step 2): non-empty, at most
/// 255 characters, none of the NAS-hostile characters, no control bytes, not
/// `.`/`..`, not a reserved Windows device name, and not the `.trash`
/// prefix reserved for the soft-delete area (§4.7).
pub fn validate_entity_name(name: &str) -> Result<(), String> {
    let validators: Vec<ValidatorFn> = vec![
        reject_empty(),
        limit_length(255),
        reject_chars(FORBIDDEN_CHARS),
        reject_control_chars(),
        reject_leading_trailing_whitespace(),
        not_dot_or_dotdot(),
        reject_reserved_names(RESERVED_DEVICE_NAMES),
        reject_prefix(TRASH_PREFIX),
    ];
    run_validators(name, &validators)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_name() {
        assert!(validate_entity_name("Q3 Report.pdf").is_ok());
    }

    #[test]
    fn empty_rejected() {
        assert!(validate_entity_name("").is_err());
    }

    #[test]
    fn too_long_rejected() {
        let name = "a".repeat(256);
        let err = validate_entity_name(&name).unwrap_err();
        assert!(err.contains("Length limit exceeded"));
    }

    #[test]
    fn forbidden_char_rejected() {
        let err = validate_entity_name("weird:name").unwrap_err();
        assert!(err.contains("Invalid character"));
    }

    #[test]
    fn dotdot_rejected() {
        assert!(validate_entity_name("..").is_err());
    }

    #[test]
    fn reserved_device_name_rejected() {
        assert!(validate_entity_name("COM1").is_err());
        assert!(validate_entity_name("com1.txt").is_err());
    }

    #[test]
    fn trash_prefix_rejected() {
        let err = validate_entity_name(".trash-backup").unwrap_err();
        assert!(err.contains("reserved prefix"));
    }

    #[test]
    fn leading_whitespace_rejected() {
        assert!(validate_entity_name(" leading").is_err());
    }
}
