//! Request bodies for the `write` route.
//!
//! Each mutation is a variant of [`WriteAction`]; serializing it produces
//! the body with the `action` discriminator taken from the variant:
//!
//! ```
//! use roam_backend_client::api::{Block, BlockLocation, CreateBlock, WriteAction};
//!
//! let action = WriteAction::CreateBlock(CreateBlock {
//!     location: BlockLocation::last("01-02-2023"),
//!     block: Block::new("hello"),
//! });
//! let body = serde_json::to_value(&action).unwrap();
//! assert_eq!(body["action"], "create-block");
//! assert_eq!(body["location"]["parent-uid"], "01-02-2023");
//! assert_eq!(body["location"]["order"], "last");
//! assert_eq!(body["block"]["string"], "hello");
//! ```

use serde::{Deserialize, Serialize};

/// Position of a block among its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockOrder {
    /// Zero-based index
    Index(u32),
    /// Named position such as `"first"` or `"last"`
    Position(String),
}

impl BlockOrder {
    /// Before all siblings.
    pub fn first() -> Self {
        BlockOrder::Position("first".to_string())
    }

    /// After all siblings.
    pub fn last() -> Self {
        BlockOrder::Position("last".to_string())
    }
}

impl From<u32> for BlockOrder {
    fn from(index: u32) -> Self {
        BlockOrder::Index(index)
    }
}

/// Where a block goes: under `parent_uid` at `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLocation {
    /// Uid of the parent block or page
    #[serde(rename = "parent-uid")]
    pub parent_uid: String,
    /// Position among the parent's children
    pub order: BlockOrder,
}

impl BlockLocation {
    /// Location under `parent_uid` at `order`.
    pub fn new(parent_uid: impl Into<String>, order: impl Into<BlockOrder>) -> Self {
        BlockLocation {
            parent_uid: parent_uid.into(),
            order: order.into(),
        }
    }

    /// Last child of `parent_uid`.
    pub fn last(parent_uid: impl Into<String>) -> Self {
        Self::new(parent_uid, BlockOrder::last())
    }

    /// First child of `parent_uid`.
    pub fn first(parent_uid: impl Into<String>) -> Self {
        Self::new(parent_uid, BlockOrder::first())
    }
}

/// Fields of a new block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block text
    pub string: String,
    /// Uid to assign; the backend generates one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Whether children are expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    /// Heading level (1-3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u8>,
    /// Text alignment flag
    #[serde(rename = "text-align", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<bool>,
    /// How children are displayed (`bullet`, `numbered`, `document`)
    #[serde(rename = "children-view-type", skip_serializing_if = "Option::is_none")]
    pub children_view_type: Option<String>,
}

impl Block {
    /// A block with the given text and no other fields.
    pub fn new(string: impl Into<String>) -> Self {
        Block {
            string: string.into(),
            ..Default::default()
        }
    }

    /// Set the uid.
    #[must_use]
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }
}

/// Changes to an existing block; unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockUpdate {
    /// Uid of the block to update
    pub uid: String,
    /// New text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    /// Expanded state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    /// Heading level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u8>,
    /// Text alignment flag
    #[serde(rename = "text-align", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<bool>,
    /// Children view type
    #[serde(rename = "children-view-type", skip_serializing_if = "Option::is_none")]
    pub children_view_type: Option<String>,
}

/// A block addressed only by uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRef {
    /// Block uid
    pub uid: String,
}

impl BlockRef {
    /// Reference to the block `uid`.
    pub fn new(uid: impl Into<String>) -> Self {
        BlockRef { uid: uid.into() }
    }
}

/// Fields of a new page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPage {
    /// Page title
    pub title: String,
    /// Uid to assign
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Children view type
    #[serde(rename = "children-view-type", skip_serializing_if = "Option::is_none")]
    pub children_view_type: Option<String>,
}

impl NewPage {
    /// A page with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        NewPage {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Changes to an existing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageUpdate {
    /// Uid of the page to update
    pub uid: String,
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Children view type
    #[serde(rename = "children-view-type", skip_serializing_if = "Option::is_none")]
    pub children_view_type: Option<String>,
}

/// A page addressed only by uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    /// Page uid
    pub uid: String,
}

impl PageRef {
    /// Reference to the page `uid`.
    pub fn new(uid: impl Into<String>) -> Self {
        PageRef { uid: uid.into() }
    }
}

/// Body of `create-block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBlock {
    /// Where to insert
    pub location: BlockLocation,
    /// The new block
    pub block: Block,
}

/// Body of `move-block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveBlock {
    /// Destination
    pub location: BlockLocation,
    /// Block to move
    pub block: BlockRef,
}

/// Body of `update-block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBlock {
    /// Block changes
    pub block: BlockUpdate,
}

/// Body of `delete-block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBlock {
    /// Block to delete
    pub block: BlockRef,
}

/// Body of `create-page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePage {
    /// The new page
    pub page: NewPage,
}

/// Body of `update-page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePage {
    /// Page changes
    pub page: PageUpdate,
}

/// Body of `delete-page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePage {
    /// Page to delete
    pub page: PageRef,
}

/// A mutation sent to the `write` route, tagged by its `action` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum WriteAction {
    /// `create-block`
    CreateBlock(CreateBlock),
    /// `move-block`
    MoveBlock(MoveBlock),
    /// `update-block`
    UpdateBlock(UpdateBlock),
    /// `delete-block`
    DeleteBlock(DeleteBlock),
    /// `create-page`
    CreatePage(CreatePage),
    /// `update-page`
    UpdatePage(UpdatePage),
    /// `delete-page`
    DeletePage(DeletePage),
}

impl WriteAction {
    /// The `action` discriminator sent for this mutation.
    pub fn name(&self) -> &'static str {
        match self {
            WriteAction::CreateBlock(_) => "create-block",
            WriteAction::MoveBlock(_) => "move-block",
            WriteAction::UpdateBlock(_) => "update-block",
            WriteAction::DeleteBlock(_) => "delete-block",
            WriteAction::CreatePage(_) => "create-page",
            WriteAction::UpdatePage(_) => "update-page",
            WriteAction::DeletePage(_) => "delete-page",
        }
    }
}

macro_rules! impl_from_body {
    ($($body:ident),* $(,)?) => {
        $(
            impl From<$body> for WriteAction {
                fn from(body: $body) -> Self {
                    WriteAction::$body(body)
                }
            }
        )*
    };
}

impl_from_body!(
    CreateBlock,
    MoveBlock,
    UpdateBlock,
    DeleteBlock,
    CreatePage,
    UpdatePage,
    DeletePage,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_omitted() {
        let value = serde_json::to_value(Block::new("x")).unwrap();
        assert_eq!(value, json!({"string": "x"}));
    }

    #[test]
    fn test_kebab_case_fields() {
        let block = Block {
            text_align: Some(true),
            children_view_type: Some("numbered".into()),
            heading: Some(2),
            ..Block::new("x")
        };
        let value = serde_json::to_value(block).unwrap();
        assert_eq!(value["text-align"], true);
        assert_eq!(value["children-view-type"], "numbered");
        assert_eq!(value["heading"], 2);
    }

    #[test]
    fn test_order_serialization() {
        assert_eq!(serde_json::to_value(BlockOrder::Index(3)).unwrap(), json!(3));
        assert_eq!(serde_json::to_value(BlockOrder::last()).unwrap(), json!("last"));
    }

    #[test]
    fn test_action_names_match_tags() {
        let actions: Vec<WriteAction> = vec![
            DeleteBlock { block: BlockRef::new("b") }.into(),
            MoveBlock {
                location: BlockLocation::new("p", 0u32),
                block: BlockRef::new("b"),
            }
            .into(),
            UpdatePage {
                page: PageUpdate {
                    uid: "p".into(),
                    title: Some("T".into()),
                    ..Default::default()
                },
            }
            .into(),
            DeletePage { page: PageRef::new("p") }.into(),
        ];

        for action in actions {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["action"], action.name());
        }
    }

    #[test]
    fn test_update_block_body() {
        let action = WriteAction::from(UpdateBlock {
            block: BlockUpdate {
                uid: "abc".into(),
                string: Some("new".into()),
                ..Default::default()
            },
        });
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"action": "update-block", "block": {"uid": "abc", "string": "new"}})
        );
    }

    #[test]
    fn test_action_round_trips_from_backend_shape() {
        let parsed: WriteAction = serde_json::from_value(json!({
            "action": "create-page",
            "page": {"title": "Inbox"}
        }))
        .unwrap();
        assert_eq!(parsed, CreatePage { page: NewPage::new("Inbox") }.into());
    }
}
