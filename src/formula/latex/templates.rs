// Template rendering for LaTeX snippets
//
// Templates use named placeholders such as `{text}` or `{num}`. Literal
// braces are written doubled, so `\frac{{{num}}}{{{den}}}` renders as
// `\frac{1}{2}` for num=1, den=2.

/// Render `template`, substituting each `{name}` found in `args`.
///
/// Placeholders with no matching argument and unpaired braces are copied
/// through unchanged.
///
/// # Examples
///
/// ```
/// use omml_latex::render_template;
///
/// let latex = render_template("\\frac{{{num}}}{{{den}}}", &[("num", "1"), ("den", "2")]);
/// assert_eq!(latex, "\\frac{1}{2}");
/// ```
pub fn render_template(template: &str, args: &[(&str, &str)]) -> String {
    let capacity = template.len() + args.iter().map(|(_, v)| v.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('{') {
            match placeholder(tail, args) {
                Some((value, consumed)) => {
                    out.push_str(value);
                    rest = &tail[consumed..];
                },
                None => {
                    out.push('{');
                    rest = &tail[1..];
                },
            }
        } else {
            out.push('}');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Render a single-argument template, the common `{text}` case.
#[inline]
pub fn render_text(template: &str, text: &str) -> String {
    render_template(template, &[("text", text)])
}

fn placeholder<'a>(tail: &str, args: &[(&str, &'a str)]) -> Option<(&'a str, usize)> {
    let end = tail.find('}')?;
    let name = &tail[1..end];
    args.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| (*value, end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_named() {
        assert_eq!(
            render_template("\\left{left}{text}\\right{right}", &[("left", "("), ("text", "x"), ("right", ")")]),
            "\\left(x\\right)"
        );
    }

    #[test]
    fn test_render_doubled_braces() {
        assert_eq!(render_text("\\hat{{{text}}}", "a"), "\\hat{a}");
        assert_eq!(render_text("_{{{text}}}", ""), "_{}");
        assert_eq!(
            render_template("\\genfrac{{}}{{}}{{0pt}}{{}}{{{num}}}{{{den}}}", &[("num", "a"), ("den", "b")]),
            "\\genfrac{}{}{0pt}{}{a}{b}"
        );
    }

    #[test]
    fn test_render_value_is_not_rescanned() {
        assert_eq!(render_text("^{{{text}}}", "{text}"), "^{{text}}");
    }

    #[test]
    fn test_render_unknown_placeholder_kept() {
        assert_eq!(render_text("\\cmd{other}", "x"), "\\cmd{other}");
        assert_eq!(render_text("a{b", "x"), "a{b");
        assert_eq!(render_text("a}b", "x"), "a}b");
    }
}
