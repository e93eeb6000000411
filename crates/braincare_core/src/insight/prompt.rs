//! Instruction templates sent to the text-generation service.

pub(crate) fn explain_prompt(code: &str, context: &str) -> String {
    format!(
        "Analyze the following code and explanation context.\n\
         Provide a concise \"AI Pro Tip\" or high-level technical insight related to this specific implementation.\n\
         \n\
         CODE:\n\
         {code}\n\
         \n\
         CONTEXT:\n\
         {context}\n"
    )
}

pub(crate) fn summary_prompt(content: &str) -> String {
    format!("Summarize this technology article in exactly 2 visionary sentences: {content}")
}

/// Context handed to [`explain_prompt`] when rewriting a draft body.
pub(crate) fn refine_context(content: &str) -> String {
    format!(
        "Rewrite this article to be more professional, visionary, and technical. \
         Keep it concise but impactful: {content}"
    )
}
