use crate::request::GenerationRequest;

/// Build the single instruction sent to the model for `request`.
///
/// The model is asked to infer a schema from the free-text description and
/// answer with nothing but the JSON array. Whether it complies is not checked.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "Generate an array of {count} JSON objects.\n\
         Each object should represent a realistic dataset based on the following high-level description: \"{description}\".\n\
         Infer a suitable JSON schema, including appropriate field names and data types \
         (e.g., string, number, boolean, email, date, url, uuid, etc.).\n\
         For each field, generate realistic dummy data that fits the inferred type and context.\n\
         For example, if you infer a 'name' field, provide realistic names. If an 'age' field, provide realistic numbers.\n\
         If an array is inferred, include 1-3 relevant items.\n\
         Ensure the output is *only* the JSON array, with no additional text, \
         markdown wrappers (like ```json), or formatting outside the JSON itself.",
        count = request.count(),
        description = request.description(),
    )
}
