//! Domain types for the todo application.
//!
//! A todo list is an ordered sequence of items; insertion order is the
//! display order. Items are created, toggled, and removed through
//! [`TodoAction`] commands - there is no other mutation path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a todo item
///
/// Issued by the store's identifier sequence; strictly increasing in
/// issuance order and never reused, so all ids in a list are pairwise
/// distinct.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw sequence value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// `id` and `text` are immutable once the item exists; `done` flips only
/// through [`TodoAction::Toggle`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Human-readable description
    pub text: String,
    /// Completion flag
    pub done: bool,
}

impl TodoItem {
    /// Creates a new, not-yet-done todo item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Copy of this item with the completion flag flipped
    ///
    /// Structural replacement rather than in-place mutation, so the
    /// containing list never aliases a half-updated item.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            done: !self.done,
        }
    }
}

/// The ordered todo list owned by the store
///
/// Invariant: ids are pairwise distinct. The list itself does not
/// deduplicate; ids come from the store's sequence, and each issued value
/// is used at most once by the creating workflow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<TodoItem>);

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The fixed dataset a fresh session starts from
    ///
    /// Four items with ids 1-4; the first two already done. The id
    /// sequence for a store seeded with this list starts at 5
    /// (see [`TodoList::id_floor`]).
    #[must_use]
    pub fn seed() -> Self {
        Self(vec![
            TodoItem {
                id: TodoId::new(1),
                text: "set up the project".to_string(),
                done: true,
            },
            TodoItem {
                id: TodoId::new(2),
                text: "style the components".to_string(),
                done: true,
            },
            TodoItem {
                id: TodoId::new(3),
                text: "build the context".to_string(),
                done: false,
            },
            TodoItem {
                id: TodoId::new(4),
                text: "implement the features".to_string(),
                done: false,
            },
        ])
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The items in display order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.0
    }

    /// Iterator over the items in display order
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.0.iter()
    }

    /// Ids in display order
    pub fn ids(&self) -> impl Iterator<Item = TodoId> + '_ {
        self.0.iter().map(|item| item.id)
    }

    /// Item with the given id, if present
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.0.iter().find(|item| item.id == id)
    }

    /// Whether an item with the given id is present
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Number of completed items
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.0.iter().filter(|item| item.done).count()
    }

    /// First identifier not yet used by this list
    ///
    /// One greater than the highest id present; 1 for an empty list.
    /// The store's sequence is initialized from this value.
    #[must_use]
    pub fn id_floor(&self) -> u64 {
        self.0
            .iter()
            .map(|item| item.id.value())
            .max()
            .map_or(1, |max| max + 1)
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Commands the UI layer submits to the store
///
/// Serialized with an internal `type` tag matching the wire shape the
/// display layer speaks: `{"type":"CREATE","todo":{...}}`,
/// `{"type":"TOGGLE","id":3}`, `{"type":"REMOVE","id":1}`. Any other tag
/// lands in [`TodoAction::Unknown`] and is rejected by the reducer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a fully formed item (id already assigned) to the list
    Create {
        /// The item to append
        todo: TodoItem,
    },

    /// Flip the completion flag of the item with this id
    Toggle {
        /// Target item id
        id: TodoId,
    },

    /// Remove the item with this id from the list
    Remove {
        /// Target item id
        id: TodoId,
    },

    /// A command tag this application does not implement
    ///
    /// Fallback for anything the tagged variants above do not match.
    /// Kept as data (rather than failing at the codec) so the reducer is
    /// the single place that rejects it, with the offending tag attached.
    #[serde(untagged)]
    Unknown {
        /// The unrecognized `type` tag
        #[serde(rename = "type")]
        kind: String,
    },
}

/// Errors the todo reducer can raise
///
/// Fatal to the calling operation and aimed at the developer: an
/// unhandled action means a typo'd or unimplemented command in the
/// caller, not a user-recoverable condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The command's type tag is none of CREATE/TOGGLE/REMOVE
    #[error("unhandled action type: {kind}")]
    UnhandledAction {
        /// The offending type tag
        kind: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        assert_eq!(TodoId::new(42).to_string(), "42");
    }

    #[test]
    fn todo_item_new_is_not_done() {
        let item = TodoItem::new(TodoId::new(1), "write tests");
        assert_eq!(item.id, TodoId::new(1));
        assert_eq!(item.text, "write tests");
        assert!(!item.done);
    }

    #[test]
    fn todo_item_toggled_flips_only_done() {
        let item = TodoItem::new(TodoId::new(1), "write tests");
        let toggled = item.toggled();
        assert!(toggled.done);
        assert_eq!(toggled.id, item.id);
        assert_eq!(toggled.text, item.text);
        assert_eq!(toggled.toggled(), item);
    }

    #[test]
    fn seed_has_four_items_with_expected_flags() {
        let seed = TodoList::seed();
        assert_eq!(seed.len(), 4);
        assert_eq!(
            seed.ids().collect::<Vec<_>>(),
            vec![TodoId::new(1), TodoId::new(2), TodoId::new(3), TodoId::new(4)]
        );
        assert!(seed.get(TodoId::new(1)).unwrap().done);
        assert!(seed.get(TodoId::new(2)).unwrap().done);
        assert!(!seed.get(TodoId::new(3)).unwrap().done);
        assert!(!seed.get(TodoId::new(4)).unwrap().done);
        assert_eq!(seed.done_count(), 2);
    }

    #[test]
    fn seed_id_floor_is_five() {
        assert_eq!(TodoList::seed().id_floor(), 5);
        assert_eq!(TodoList::new().id_floor(), 1);
    }

    #[test]
    fn action_wire_format_matches_ui_contract() {
        let create = TodoAction::Create {
            todo: TodoItem::new(TodoId::new(5), "write tests"),
        };
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            serde_json::json!({
                "type": "CREATE",
                "todo": { "id": 5, "text": "write tests", "done": false }
            })
        );

        let toggle: TodoAction = serde_json::from_value(serde_json::json!({
            "type": "TOGGLE",
            "id": 3
        }))
        .unwrap();
        assert_eq!(toggle, TodoAction::Toggle { id: TodoId::new(3) });

        let remove: TodoAction = serde_json::from_value(serde_json::json!({
            "type": "REMOVE",
            "id": 1
        }))
        .unwrap();
        assert_eq!(remove, TodoAction::Remove { id: TodoId::new(1) });
    }

    #[test]
    fn unrecognized_tag_deserializes_to_unknown() {
        let action: TodoAction =
            serde_json::from_value(serde_json::json!({ "type": "ARCHIVE" })).unwrap();
        assert_eq!(
            action,
            TodoAction::Unknown {
                kind: "ARCHIVE".to_string()
            }
        );
    }

    #[test]
    fn todo_list_serializes_as_plain_sequence() {
        let list = TodoList::seed();
        let value = serde_json::to_value(&list).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 4);
    }
}
