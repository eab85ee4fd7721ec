use crate::{CarrierError, CarrierResult};

const PLACEHOLDER: char = 's';

/// Substitute `value` into a printf-style template holding exactly one `%s`.
///
/// `%%` renders a literal percent sign. Any other directive, a dangling `%`,
/// or a placeholder count other than one is a template error.
pub fn substitute(template: &str, value: &str) -> CarrierResult<String> {
    let mut rendered = String::with_capacity(template.len() + value.len());
    let mut placeholders = 0;
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            rendered.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => rendered.push('%'),
            Some(PLACEHOLDER) => {
                placeholders += 1;
                rendered.push_str(value);
            }
            Some(other) => {
                return Err(template_error(
                    template,
                    format!("unsupported format character '{}'", other),
                ))
            }
            None => return Err(template_error(template, "incomplete format".to_string())),
        }
    }

    match placeholders {
        1 => Ok(rendered),
        0 => Err(template_error(template, "no %s placeholder for the tracking code".to_string())),
        n => Err(template_error(template, format!("expected one %s placeholder, found {}", n))),
    }
}

fn template_error(template: &str, reason: String) -> CarrierError {
    CarrierError::Template {
        template: template.to_string(),
        reason,
    }
}
