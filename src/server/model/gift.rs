//! Gift codes shared by orders and recipients.

use std::fmt;

/// Kind of gift that can be ordered or requested for a recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GiftType {
    Mug,
    TShirt,
    Hoodie,
    Sticker,
}

impl GiftType {
    /// Every gift code, in the order they are documented.
    pub const ALL: [GiftType; 4] = [
        GiftType::Mug,
        GiftType::TShirt,
        GiftType::Hoodie,
        GiftType::Sticker,
    ];

    /// Returns the wire and storage representation of the gift code.
    pub fn as_str(&self) -> &'static str {
        match self {
            GiftType::Mug => "MUG",
            GiftType::TShirt => "T_SHIRT",
            GiftType::Hoodie => "HOODIE",
            GiftType::Sticker => "STICKER",
        }
    }

    /// Parses a gift code. Matching is exact; `"mug"` is not a gift code.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gift| gift.as_str() == value)
    }
}

impl fmt::Display for GiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
