/// Instruction sent ahead of the user's text.
pub const INSTRUCTION: &str = "Summarize the following content in three lines. \
Keep each sentence short and clipped, ending in a terse noun or verb phrase. \
Start each sentence with one emoji that fits it.
# Example Output
🤖 Composer agent, Cursor's new feature, generates code on command and lets the user decide whether to run it.
⚡ Agent mode runs generated code after user approval, while auto mode handles every step automatically.
🛡️ Granting execution rights to the user keeps things safe, but users who cannot read the code should take care.";

/// Join the instruction and the user's text with a blank line.
///
/// The text is embedded verbatim; JSON encoding of the request body handles escaping.
pub fn build_prompt(instruction: &str, text: &str) -> String {
    format!("{instruction}\n\n{text}")
}
