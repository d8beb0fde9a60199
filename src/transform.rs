//! Transformation of validated task items into output records

use crate::task::{ProcessedTask, TaskItem};

/// Turn validated items into output records
///
/// Each record keeps the input fields and gains `processed: true` and
/// `name_length`. Order and count are preserved. Input is trusted to have
/// passed validation; nothing is re-checked here.
pub fn process_items(items: Vec<TaskItem>) -> Vec<ProcessedTask> {
    items.into_iter().map(process_item).collect()
}

/// Build the output record for one item
///
/// `name_length` counts characters of the name exactly as given, including
/// any leading or trailing whitespace.
pub fn process_item(item: TaskItem) -> ProcessedTask {
    let name_length = item.name.chars().count();
    ProcessedTask {
        id: item.id,
        name: item.name,
        value: item.value,
        processed: true,
        name_length,
    }
}
