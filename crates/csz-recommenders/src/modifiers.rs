//! Recommenders for declaration modifiers.
//!
//! Every modifier shares the same placement question (can a declaration
//! start here) plus a per-modifier compatibility check against the
//! modifiers already typed, so they are all instances of one table-drawn
//! recommender.

use csz_context::{ModifierFlags, SyntaxContext};

use crate::KeywordRecommender;

/// Where a modifier may introduce a declaration.
#[derive(Clone, Copy)]
struct Placement {
    member: bool,
    type_decl: bool,
    statement: bool,
}

const MEMBER_ONLY: Placement = Placement {
    member: true,
    type_decl: false,
    statement: false,
};

const MEMBER_OR_TYPE: Placement = Placement {
    member: true,
    type_decl: true,
    statement: false,
};

struct ModifierRecommender {
    text: &'static str,
    flag: ModifierFlags,
    /// Modifiers that rule this one out when already present.
    incompatible: ModifierFlags,
    placement: Placement,
}

impl ModifierRecommender {
    const fn new(
        text: &'static str,
        flag: ModifierFlags,
        incompatible: ModifierFlags,
        placement: Placement,
    ) -> Self {
        ModifierRecommender {
            text,
            flag,
            incompatible,
            placement,
        }
    }
}

impl KeywordRecommender for ModifierRecommender {
    fn keyword_text(&self) -> &'static str {
        self.text
    }

    fn is_valid_context(&self, _position: u32, ctx: &SyntaxContext<'_>) -> bool {
        let placed = (self.placement.member && ctx.is_member_declaration_context())
            || (self.placement.type_decl && ctx.is_type_declaration_context())
            || (self.placement.statement
                && (ctx.is_statement_context() || ctx.is_global_statement_context()));
        if !placed {
            return false;
        }
        let preceding = ctx.preceding_modifiers();
        if preceding.is_empty() {
            return true;
        }
        // A run that does not start at a declaration boundary is not a
        // modifier list at all.
        ctx.modifiers_anchored() && !preceding.intersects(self.incompatible | self.flag)
    }
}

pub(crate) fn add_recommenders(all: &mut Vec<Box<dyn KeywordRecommender>>) {
    use ModifierFlags as F;

    let table = [
        ModifierRecommender::new(
            "abstract",
            F::ABSTRACT,
            F::SEALED.union(F::STATIC).union(F::VIRTUAL).union(F::EXTERN),
            MEMBER_OR_TYPE,
        ),
        ModifierRecommender::new(
            "async",
            F::ASYNC,
            F::ABSTRACT.union(F::EXTERN).union(F::CONST),
            MEMBER_ONLY,
        ),
        ModifierRecommender::new(
            "const",
            F::CONST,
            F::STATIC
                .union(F::READONLY)
                .union(F::VOLATILE)
                .union(F::ABSTRACT)
                .union(F::VIRTUAL)
                .union(F::OVERRIDE)
                .union(F::SEALED)
                .union(F::ASYNC)
                .union(F::EXTERN),
            Placement {
                member: true,
                type_decl: false,
                statement: true,
            },
        ),
        ModifierRecommender::new(
            "extern",
            F::EXTERN,
            F::ABSTRACT.union(F::VIRTUAL).union(F::OVERRIDE).union(F::ASYNC),
            MEMBER_ONLY,
        ),
        ModifierRecommender::new(
            "internal",
            F::INTERNAL,
            F::PUBLIC.union(F::PRIVATE),
            MEMBER_OR_TYPE,
        ),
        ModifierRecommender::new(
            "override",
            F::OVERRIDE,
            F::STATIC.union(F::VIRTUAL).union(F::NEW),
            MEMBER_ONLY,
        ),
        ModifierRecommender::new("partial", F::PARTIAL, F::empty(), MEMBER_OR_TYPE),
        ModifierRecommender::new(
            "private",
            F::PRIVATE,
            F::PUBLIC.union(F::INTERNAL),
            MEMBER_OR_TYPE,
        ),
        ModifierRecommender::new("protected", F::PROTECTED, F::PUBLIC, MEMBER_OR_TYPE),
        ModifierRecommender::new("public", F::PUBLIC, F::ACCESSIBILITY, MEMBER_OR_TYPE),
        ModifierRecommender::new("readonly", F::READONLY, F::CONST, MEMBER_OR_TYPE),
        ModifierRecommender::new(
            "sealed",
            F::SEALED,
            F::ABSTRACT.union(F::STATIC).union(F::VIRTUAL),
            MEMBER_OR_TYPE,
        ),
        ModifierRecommender::new(
            "static",
            F::STATIC,
            F::ABSTRACT
                .union(F::VIRTUAL)
                .union(F::OVERRIDE)
                .union(F::SEALED)
                .union(F::CONST),
            MEMBER_OR_TYPE,
        ),
        ModifierRecommender::new(
            "unsafe",
            F::UNSAFE,
            F::empty(),
            Placement {
                member: true,
                type_decl: true,
                statement: true,
            },
        ),
        ModifierRecommender::new(
            "virtual",
            F::VIRTUAL,
            F::ABSTRACT.union(F::STATIC).union(F::OVERRIDE).union(F::SEALED),
            MEMBER_ONLY,
        ),
        ModifierRecommender::new(
            "volatile",
            F::VOLATILE,
            F::CONST.union(F::READONLY),
            MEMBER_ONLY,
        ),
    ];
    for r in table {
        all.push(Box::new(r));
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{assert_not_recommended, assert_recommended};

    #[test]
    fn test_accessibility_in_declaration_positions() {
        for kw in ["public", "private", "protected", "internal"] {
            assert_recommended("class C { @@ }", kw);
            assert_not_recommended("class C { void M() { @@ } }", kw);
        }
        assert_recommended("namespace N { @@ }", "public");
        assert_recommended("namespace N { @@ }", "internal");
    }

    #[test]
    fn test_accessibility_does_not_repeat() {
        assert_not_recommended("class C { public @@ }", "public");
        assert_not_recommended("class C { public @@ }", "private");
        assert_not_recommended("class C { private @@ }", "internal");
        // `protected internal` and `private protected` are legal pairs.
        assert_recommended("class C { protected @@ }", "internal");
        assert_recommended("class C { private @@ }", "protected");
    }

    #[test]
    fn test_abstract_sealed_static_exclusion() {
        assert_recommended("class C { public @@ }", "abstract");
        assert_not_recommended("class C { sealed @@ }", "abstract");
        assert_not_recommended("class C { static @@ }", "abstract");
        assert_not_recommended("class C { abstract @@ }", "sealed");
        assert_not_recommended("class C { abstract @@ }", "static");
        // `abstract override` is a legal combination.
        assert_recommended("class C { abstract @@ }", "override");
    }

    #[test]
    fn test_static_readonly_pairing() {
        assert_recommended("class C { static @@ }", "readonly");
        assert_recommended("class C { readonly @@ }", "static");
        assert_not_recommended("class C { const @@ }", "static");
        assert_not_recommended("class C { readonly @@ }", "const");
    }

    #[test]
    fn test_const_as_local_modifier() {
        assert_recommended("class C { void M() { @@ } }", "const");
        assert_recommended("class C { void M() { @@ } }", "unsafe");
        assert_not_recommended("class C { void M() { @@ } }", "virtual");
    }

    #[test]
    fn test_async_placement() {
        assert_recommended("class C { public @@ }", "async");
        assert_not_recommended("class C { abstract @@ }", "async");
    }
}
