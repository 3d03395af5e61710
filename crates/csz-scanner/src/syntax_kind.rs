//! Token kinds and reserved-word classification.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The kind of a scanned token.
///
/// Reserved words get their own variants so the context layer can match
/// on them directly instead of comparing identifier text. Contextual
/// words of the language (`async`, `await`, `var`, `partial`, `yield`)
/// are lexed as keywords here; the completion layer works on the token
/// stream alone and never needs to re-interpret them as identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Unknown,
    EndOfFile,

    // Names and literals
    Identifier,
    NumericLiteral,
    StringLiteral,
    CharLiteral,

    // Punctuation
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Dot,
    Colon,
    Question,
    QuestionQuestion,
    Hash,
    Equals,
    EqualsEquals,
    EqualsGreaterThan,
    Exclamation,
    ExclamationEquals,
    LessThan,
    LessThanEquals,
    GreaterThan,
    GreaterThanEquals,
    Plus,
    PlusPlus,
    PlusEquals,
    Minus,
    MinusMinus,
    MinusEquals,
    Asterisk,
    AsteriskEquals,
    Slash,
    SlashEquals,
    Percent,
    Ampersand,
    AmpersandAmpersand,
    Bar,
    BarBar,
    Caret,
    Tilde,

    // Reserved words
    AbstractKeyword,
    AsKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BaseKeyword,
    BoolKeyword,
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    CharKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DefaultKeyword,
    DelegateKeyword,
    DoKeyword,
    DoubleKeyword,
    ElseKeyword,
    EnumKeyword,
    ExternKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    ForeachKeyword,
    GotoKeyword,
    IfKeyword,
    InKeyword,
    IntKeyword,
    InterfaceKeyword,
    InternalKeyword,
    IsKeyword,
    LockKeyword,
    LongKeyword,
    NamespaceKeyword,
    NewKeyword,
    NullKeyword,
    ObjectKeyword,
    OutKeyword,
    OverrideKeyword,
    ParamsKeyword,
    PartialKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReadonlyKeyword,
    RefKeyword,
    ReturnKeyword,
    SealedKeyword,
    SizeofKeyword,
    StaticKeyword,
    StringKeyword,
    StructKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeofKeyword,
    UnsafeKeyword,
    UsingKeyword,
    VarKeyword,
    VirtualKeyword,
    VoidKeyword,
    VolatileKeyword,
    WhileKeyword,
    YieldKeyword,
}

/// (text, kind) pairs for every reserved word the scanner recognizes.
const KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("abstract", SyntaxKind::AbstractKeyword),
    ("as", SyntaxKind::AsKeyword),
    ("async", SyntaxKind::AsyncKeyword),
    ("await", SyntaxKind::AwaitKeyword),
    ("base", SyntaxKind::BaseKeyword),
    ("bool", SyntaxKind::BoolKeyword),
    ("break", SyntaxKind::BreakKeyword),
    ("case", SyntaxKind::CaseKeyword),
    ("catch", SyntaxKind::CatchKeyword),
    ("char", SyntaxKind::CharKeyword),
    ("class", SyntaxKind::ClassKeyword),
    ("const", SyntaxKind::ConstKeyword),
    ("continue", SyntaxKind::ContinueKeyword),
    ("default", SyntaxKind::DefaultKeyword),
    ("delegate", SyntaxKind::DelegateKeyword),
    ("do", SyntaxKind::DoKeyword),
    ("double", SyntaxKind::DoubleKeyword),
    ("else", SyntaxKind::ElseKeyword),
    ("enum", SyntaxKind::EnumKeyword),
    ("extern", SyntaxKind::ExternKeyword),
    ("false", SyntaxKind::FalseKeyword),
    ("finally", SyntaxKind::FinallyKeyword),
    ("for", SyntaxKind::ForKeyword),
    ("foreach", SyntaxKind::ForeachKeyword),
    ("goto", SyntaxKind::GotoKeyword),
    ("if", SyntaxKind::IfKeyword),
    ("in", SyntaxKind::InKeyword),
    ("int", SyntaxKind::IntKeyword),
    ("interface", SyntaxKind::InterfaceKeyword),
    ("internal", SyntaxKind::InternalKeyword),
    ("is", SyntaxKind::IsKeyword),
    ("lock", SyntaxKind::LockKeyword),
    ("long", SyntaxKind::LongKeyword),
    ("namespace", SyntaxKind::NamespaceKeyword),
    ("new", SyntaxKind::NewKeyword),
    ("null", SyntaxKind::NullKeyword),
    ("object", SyntaxKind::ObjectKeyword),
    ("out", SyntaxKind::OutKeyword),
    ("override", SyntaxKind::OverrideKeyword),
    ("params", SyntaxKind::ParamsKeyword),
    ("partial", SyntaxKind::PartialKeyword),
    ("private", SyntaxKind::PrivateKeyword),
    ("protected", SyntaxKind::ProtectedKeyword),
    ("public", SyntaxKind::PublicKeyword),
    ("readonly", SyntaxKind::ReadonlyKeyword),
    ("ref", SyntaxKind::RefKeyword),
    ("return", SyntaxKind::ReturnKeyword),
    ("sealed", SyntaxKind::SealedKeyword),
    ("sizeof", SyntaxKind::SizeofKeyword),
    ("static", SyntaxKind::StaticKeyword),
    ("string", SyntaxKind::StringKeyword),
    ("struct", SyntaxKind::StructKeyword),
    ("switch", SyntaxKind::SwitchKeyword),
    ("this", SyntaxKind::ThisKeyword),
    ("throw", SyntaxKind::ThrowKeyword),
    ("true", SyntaxKind::TrueKeyword),
    ("try", SyntaxKind::TryKeyword),
    ("typeof", SyntaxKind::TypeofKeyword),
    ("unsafe", SyntaxKind::UnsafeKeyword),
    ("using", SyntaxKind::UsingKeyword),
    ("var", SyntaxKind::VarKeyword),
    ("virtual", SyntaxKind::VirtualKeyword),
    ("void", SyntaxKind::VoidKeyword),
    ("volatile", SyntaxKind::VolatileKeyword),
    ("while", SyntaxKind::WhileKeyword),
    ("yield", SyntaxKind::YieldKeyword),
];

static KEYWORD_MAP: Lazy<FxHashMap<&'static str, SyntaxKind>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Look up the keyword kind for an identifier-shaped word.
pub fn keyword_kind(text: &str) -> Option<SyntaxKind> {
    KEYWORD_MAP.get(text).copied()
}

impl SyntaxKind {
    /// The literal text of a reserved word or fixed punctuation token.
    /// Identifier/literal kinds have no fixed text and return `None`.
    pub fn text(self) -> Option<&'static str> {
        if let Some(&(text, _)) = KEYWORDS.iter().find(|&&(_, kind)| kind == self) {
            return Some(text);
        }
        let text = match self {
            SyntaxKind::OpenBrace => "{",
            SyntaxKind::CloseBrace => "}",
            SyntaxKind::OpenParen => "(",
            SyntaxKind::CloseParen => ")",
            SyntaxKind::OpenBracket => "[",
            SyntaxKind::CloseBracket => "]",
            SyntaxKind::Semicolon => ";",
            SyntaxKind::Comma => ",",
            SyntaxKind::Dot => ".",
            SyntaxKind::Colon => ":",
            SyntaxKind::Question => "?",
            SyntaxKind::QuestionQuestion => "??",
            SyntaxKind::Hash => "#",
            SyntaxKind::Equals => "=",
            SyntaxKind::EqualsEquals => "==",
            SyntaxKind::EqualsGreaterThan => "=>",
            SyntaxKind::Exclamation => "!",
            SyntaxKind::ExclamationEquals => "!=",
            SyntaxKind::LessThan => "<",
            SyntaxKind::LessThanEquals => "<=",
            SyntaxKind::GreaterThan => ">",
            SyntaxKind::GreaterThanEquals => ">=",
            SyntaxKind::Plus => "+",
            SyntaxKind::PlusPlus => "++",
            SyntaxKind::PlusEquals => "+=",
            SyntaxKind::Minus => "-",
            SyntaxKind::MinusMinus => "--",
            SyntaxKind::MinusEquals => "-=",
            SyntaxKind::Asterisk => "*",
            SyntaxKind::AsteriskEquals => "*=",
            SyntaxKind::Slash => "/",
            SyntaxKind::SlashEquals => "/=",
            SyntaxKind::Percent => "%",
            SyntaxKind::Ampersand => "&",
            SyntaxKind::AmpersandAmpersand => "&&",
            SyntaxKind::Bar => "|",
            SyntaxKind::BarBar => "||",
            SyntaxKind::Caret => "^",
            SyntaxKind::Tilde => "~",
            _ => return None,
        };
        Some(text)
    }

    /// Keyword variants form one contiguous run at the end of the enum.
    pub fn is_keyword(self) -> bool {
        self as u32 >= SyntaxKind::AbstractKeyword as u32
    }

    /// Declaration modifiers that may precede a type or member declaration.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::ExternKeyword
                | SyntaxKind::InternalKeyword
                | SyntaxKind::NewKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::PartialKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::SealedKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::UnsafeKeyword
                | SyntaxKind::VirtualKeyword
                | SyntaxKind::VolatileKeyword
        )
    }

    pub fn is_accessibility_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::InternalKeyword
        )
    }

    /// Built-in value/reference type keywords.
    pub fn is_intrinsic_type(self) -> bool {
        matches!(
            self,
            SyntaxKind::BoolKeyword
                | SyntaxKind::CharKeyword
                | SyntaxKind::DoubleKeyword
                | SyntaxKind::IntKeyword
                | SyntaxKind::LongKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::VoidKeyword
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword_kind("class"), Some(SyntaxKind::ClassKeyword));
        assert_eq!(keyword_kind("yield"), Some(SyntaxKind::YieldKeyword));
        assert_eq!(keyword_kind("abstract"), Some(SyntaxKind::AbstractKeyword));
        assert_eq!(keyword_kind("Class"), None);
        assert_eq!(keyword_kind("classes"), None);
    }

    #[test]
    fn test_keyword_text_roundtrip() {
        for &(text, kind) in KEYWORDS {
            assert_eq!(kind.text(), Some(text));
            assert!(kind.is_keyword(), "{text} should classify as keyword");
        }
    }

    #[test]
    fn test_punctuation_text() {
        assert_eq!(SyntaxKind::EqualsGreaterThan.text(), Some("=>"));
        assert_eq!(SyntaxKind::OpenBrace.text(), Some("{"));
        assert_eq!(SyntaxKind::Identifier.text(), None);
    }

    #[test]
    fn test_modifier_classification() {
        assert!(SyntaxKind::AbstractKeyword.is_modifier());
        assert!(SyntaxKind::PartialKeyword.is_modifier());
        assert!(SyntaxKind::PublicKeyword.is_accessibility_modifier());
        assert!(!SyntaxKind::ReturnKeyword.is_modifier());
        assert!(!SyntaxKind::StaticKeyword.is_accessibility_modifier());
    }

    #[test]
    fn test_intrinsic_types() {
        assert!(SyntaxKind::IntKeyword.is_intrinsic_type());
        assert!(SyntaxKind::VoidKeyword.is_intrinsic_type());
        assert!(!SyntaxKind::ClassKeyword.is_intrinsic_type());
    }

    #[test]
    fn test_non_keywords_not_in_keyword_range() {
        assert!(!SyntaxKind::Identifier.is_keyword());
        assert!(!SyntaxKind::OpenBrace.is_keyword());
        assert!(!SyntaxKind::EndOfFile.is_keyword());
    }
}
