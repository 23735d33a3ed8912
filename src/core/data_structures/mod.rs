/*!
 * Data Structures
 *
 * Small-string storage for process names and error field labels.
 */

mod inline_string;

pub use inline_string::InlineString;
