// Shared system prompts. Each agent keeps its own prompts.rs for the
// user-facing templates; only cross-cutting fragments live here.

/// Default system prompt for short, direct answers.
pub const CONCISE_SYSTEM: &str = "Be precise and concise.";

/// System prompt for calls whose reply is parsed as JSON.
pub const JSON_ONLY_SYSTEM: &str = "Be precise and concise. Return ONLY raw JSON.";

/// Fills `{name}` placeholders in a single pass. Substituted values are never
/// rescanned, so user text containing a placeholder stays verbatim. Braces that
/// do not name a known placeholder (JSON examples) are left alone.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = tail.find('}').and_then(|end| {
            let name = &tail[1..end];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (end, *value))
        });
        match hit {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
