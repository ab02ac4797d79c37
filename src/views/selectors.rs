//! Selector list construction.

use super::model::SelectOption;

/// Builds a dropdown from `(id, label)` pairs.
///
/// Entries are sorted ordinally by label and headed by the "All" entry.
/// Ties keep their storage order.
pub fn build_select_list<I, S>(entries: I) -> Vec<SelectOption>
where
    I: IntoIterator<Item = (u32, S)>,
    S: Into<String>,
{
    let mut options: Vec<SelectOption> = entries
        .into_iter()
        .map(|(id, label)| SelectOption::new(id, label))
        .collect();
    options.sort_by(|a, b| a.text.cmp(&b.text));

    options.insert(0, SelectOption::all());
    options
}
