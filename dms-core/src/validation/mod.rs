//! Small composable name validators (§4.5 step 2), in the style the teacher
//! uses for username/group-id validation: a list of `ValidatorFn`s run in
//! order, the first failure short-circuiting with a human-readable message.

pub mod naming;

pub type ValidatorFn = Box<dyn Fn(&str) -> Result<(), String>>;

pub fn run_validators(input: &str, validators: &[ValidatorFn]) -> Result<(), String> {
    for validator in validators {
        validator(input)?;
    }
    Ok(())
}

pub fn limit_length(max: usize) -> ValidatorFn {
    Box::new(move |s: &str| {
        if s.chars().count() > max {
            Err(format!("Length limit exceeded: max {max} characters"))
        } else {
            Ok(())
        }
    })
}

pub fn limit_min_length(min: usize) -> ValidatorFn {
    Box::new(move |s: &str| {
        if s.chars().count() < min {
            Err(format!("Too short: minimum {min} characters"))
        } else {
            Ok(())
        }
    })
}

pub fn reject_empty() -> ValidatorFn {
    Box::new(|s: &str| {
        if s.is_empty() {
            Err("Name cannot be empty".to_string())
        } else {
            Ok(())
        }
    })
}

pub fn reject_chars(forbidden: &'static str) -> ValidatorFn {
    Box::new(move |s: &str| {
        if let Some(c) = s.chars().find(|c| forbidden.contains(*c)) {
            Err(format!("Invalid character '{c}' in name"))
        } else {
            Ok(())
        }
    })
}

pub fn reject_control_chars() -> ValidatorFn {
    Box::new(|s: &str| {
        if s.chars().any(|c| c.is_control()) {
            Err("Invalid control character in name".to_string())
        } else {
            Ok(())
        }
    })
}

pub fn reject_leading_trailing_whitespace() -> ValidatorFn {
    Box::new(|s: &str| {
        if s != s.trim() {
            Err("Name cannot start or end with whitespace".to_string())
        } else {
            Ok(())
        }
    })
}

pub fn reject_reserved_names(reserved: &'static [&'static str]) -> ValidatorFn {
    Box::new(move |s: &str| {
        let upper = s.to_uppercase();
        let stem = upper.split('.').next().unwrap_or(&upper);
        if reserved.contains(&stem) {
            Err(format!("'{s}' is a reserved name"))
        } else {
            Ok(())
        }
    })
}

pub fn reject_prefix(prefix: &'static str) -> ValidatorFn {
    Box::new(move |s: &str| {
        if s.starts_with(prefix) {
            Err(format!("Name cannot start with reserved prefix '{prefix}'"))
        } else {
            Ok(())
        }
    })
}

pub fn not_dot_or_dotdot() -> ValidatorFn {
    Box::new(|s: &str| {
        if s == "." || s == ".." {
            Err("Name cannot be '.' or '..'".to_string())
        } else {
            Ok(())
        }
    })
}
