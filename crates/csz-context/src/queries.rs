//! Context predicates.
//!
//! Each method is a pure function of the snapshot answering one question
//! a keyword recommender asks: can a statement start here, can a type be
//! declared here, is this a parameter-modifier slot, and so on. The
//! predicates work on the token stream and the classified scope stack;
//! there is no syntax tree to consult.

use csz_scanner::SyntaxKind;

use crate::context::SyntaxContext;
use crate::scope::{ScopeKind, TypeKind, build_scopes, matching_open_paren};

impl SyntaxContext<'_> {
    fn innermost_scope(&self) -> Option<ScopeKind> {
        self.scopes().last().map(|f| f.kind)
    }

    /// The token before the `(`/`,`/... controller of the matching paren
    /// of the `)` at token index `close`.
    fn paren_controller(&self, close: usize) -> Option<SyntaxKind> {
        matching_open_paren(self.tokens(), close)
            .filter(|&p| p > 0)
            .map(|p| self.tokens()[p - 1].kind)
    }

    /// A statement may start right after the target token.
    fn follows_statement_start(&self) -> bool {
        let Some(i) = self.target_index() else {
            return false;
        };
        match self.tokens()[i].kind {
            SyntaxKind::OpenBrace
            | SyntaxKind::CloseBrace
            | SyntaxKind::Semicolon
            | SyntaxKind::ElseKeyword
            | SyntaxKind::DoKeyword => true,
            // `if (...)`, `while (...)`, ... - the embedded statement.
            SyntaxKind::CloseParen => matches!(
                self.paren_controller(i),
                Some(SyntaxKind::IfKeyword)
                    | Some(SyntaxKind::WhileKeyword)
                    | Some(SyntaxKind::ForKeyword)
                    | Some(SyntaxKind::ForeachKeyword)
                    | Some(SyntaxKind::LockKeyword)
                    | Some(SyntaxKind::UsingKeyword)
            ),
            // `case 0:` - the first statement of the section.
            SyntaxKind::Colon => self.is_inside_switch(),
            _ => false,
        }
    }

    /// Start of a declaration: after `{`, `}`, `;`, a closed attribute
    /// list, or an anchored modifier run (or the very start of the file).
    fn at_declaration_start(&self) -> bool {
        let Some(i) = self.target_index() else {
            return true;
        };
        if !self.preceding_modifiers().is_empty() {
            return self.modifiers_anchored();
        }
        matches!(
            self.tokens()[i].kind,
            SyntaxKind::OpenBrace
                | SyntaxKind::CloseBrace
                | SyntaxKind::Semicolon
                | SyntaxKind::CloseBracket
        )
    }

    /// Top level of the file, at a position where a (global) statement
    /// could start.
    pub fn is_global_statement_context(&self) -> bool {
        if self.is_in_non_user_code() || !self.scopes().is_empty() {
            return false;
        }
        self.target_index().is_none() || self.follows_statement_start()
    }

    /// Start of a statement inside executable code.
    pub fn is_statement_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        self.innermost_scope()
            .is_some_and(ScopeKind::is_executable)
            && self.follows_statement_start()
    }

    /// A member declaration may start here (inside a class, struct, or
    /// interface body).
    pub fn is_member_declaration_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        matches!(
            self.innermost_scope(),
            Some(ScopeKind::Type(
                TypeKind::Class | TypeKind::Struct | TypeKind::Interface
            ))
        ) && self.at_declaration_start()
    }

    /// A type declaration may start here: top level, namespace body, or
    /// nested in a class/struct body.
    pub fn is_type_declaration_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        let scope_ok = match self.innermost_scope() {
            None => true,
            Some(ScopeKind::Namespace) => true,
            Some(ScopeKind::Type(TypeKind::Class | TypeKind::Struct)) => true,
            _ => false,
        };
        scope_ok && self.at_declaration_start()
    }

    /// A namespace declaration may start here.
    pub fn is_namespace_context(&self) -> bool {
        if self.is_in_non_user_code() || !self.preceding_modifiers().is_empty() {
            return false;
        }
        let scope_ok = matches!(self.innermost_scope(), None | Some(ScopeKind::Namespace));
        scope_ok
            && (self.target_index().is_none()
                || matches!(
                    self.target_token_kind(),
                    Some(SyntaxKind::OpenBrace)
                        | Some(SyntaxKind::CloseBrace)
                        | Some(SyntaxKind::Semicolon)
                ))
    }

    /// The caret sits where an expression may start.
    pub fn is_expression_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        matches!(
            self.target_token_kind(),
            Some(
                SyntaxKind::Equals
                    | SyntaxKind::PlusEquals
                    | SyntaxKind::MinusEquals
                    | SyntaxKind::AsteriskEquals
                    | SyntaxKind::SlashEquals
                    | SyntaxKind::OpenParen
                    | SyntaxKind::OpenBracket
                    | SyntaxKind::Comma
                    | SyntaxKind::ReturnKeyword
                    | SyntaxKind::ThrowKeyword
                    | SyntaxKind::CaseKeyword
                    | SyntaxKind::InKeyword
                    | SyntaxKind::AwaitKeyword
                    | SyntaxKind::EqualsGreaterThan
                    | SyntaxKind::Question
                    | SyntaxKind::QuestionQuestion
                    | SyntaxKind::EqualsEquals
                    | SyntaxKind::ExclamationEquals
                    | SyntaxKind::LessThan
                    | SyntaxKind::LessThanEquals
                    | SyntaxKind::GreaterThan
                    | SyntaxKind::GreaterThanEquals
                    | SyntaxKind::Plus
                    | SyntaxKind::Minus
                    | SyntaxKind::Asterisk
                    | SyntaxKind::Slash
                    | SyntaxKind::Percent
                    | SyntaxKind::Ampersand
                    | SyntaxKind::AmpersandAmpersand
                    | SyntaxKind::Bar
                    | SyntaxKind::BarBar
                    | SyntaxKind::Caret
                    | SyntaxKind::Exclamation
                    | SyntaxKind::Tilde
            )
        )
    }

    /// Expression start, statement start, or top-level statement start:
    /// the places an expression keyword like `true` or `typeof` fits.
    pub fn is_any_expression_context(&self) -> bool {
        self.is_expression_context()
            || self.is_statement_context()
            || self.is_global_statement_context()
    }

    /// The caret sits where a type name may appear.
    pub fn is_type_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        match self.target_token_kind() {
            Some(
                SyntaxKind::IsKeyword
                | SyntaxKind::AsKeyword
                | SyntaxKind::NewKeyword
                | SyntaxKind::DelegateKeyword
                | SyntaxKind::RefKeyword
                | SyntaxKind::OutKeyword
                | SyntaxKind::ParamsKeyword,
            ) => return true,
            Some(SyntaxKind::OpenParen) => {
                if let Some(i) = self.target_index()
                    && i > 0
                    && matches!(
                        self.tokens()[i - 1].kind,
                        SyntaxKind::TypeofKeyword | SyntaxKind::SizeofKeyword
                    )
                {
                    return true;
                }
            }
            _ => {}
        }
        self.is_member_declaration_context()
            || self.is_statement_context()
            || self.is_parameter_type_context()
            || self.is_catch_declaration_context()
    }

    /// Index of the unmatched `(` of the parameter list enclosing the
    /// caret, when that paren opens a declaration parameter list rather
    /// than a call argument list.
    fn enclosing_declaration_paren(&self) -> Option<usize> {
        let target = self.target_index()?;
        let tokens = self.tokens();
        let mut depth = 0i32;
        for j in (0..=target).rev() {
            match tokens[j].kind {
                SyntaxKind::CloseParen => depth += 1,
                SyntaxKind::OpenParen => {
                    if depth == 0 {
                        return self.is_declaration_paren(j).then_some(j);
                    }
                    depth -= 1;
                }
                SyntaxKind::OpenBrace | SyntaxKind::CloseBrace | SyntaxKind::Semicolon => {
                    return None;
                }
                _ => {}
            }
        }
        None
    }

    /// Declaration parameter lists look like `Type Name (`: the token
    /// before the paren is the declared name and the token before that is
    /// type-shaped. Call argument lists (`F(`, `x.F(`, `= F(`) fail the
    /// second test. `catch (` and `delegate (` count as declarations, and
    /// so do constructors, where an anchored modifier run (`public C(`)
    /// stands where the return type would be.
    fn is_declaration_paren(&self, paren: usize) -> bool {
        let tokens = self.tokens();
        if paren == 0 {
            return false;
        }
        let before = tokens[paren - 1].kind;
        if matches!(before, SyntaxKind::CatchKeyword | SyntaxKind::DelegateKeyword) {
            return true;
        }
        if before != SyntaxKind::Identifier {
            return false;
        }
        if paren < 2 {
            return false;
        }
        let prev = tokens[paren - 2].kind;
        if matches!(
            prev,
            SyntaxKind::Identifier | SyntaxKind::GreaterThan | SyntaxKind::CloseBracket
        ) || prev.is_intrinsic_type()
        {
            return true;
        }
        if !prev.is_modifier() {
            return false;
        }
        // The modifier run must start at a declaration boundary, which
        // keeps `var x = new C(` a call argument list.
        let mut j = paren - 2;
        while j > 0 && tokens[j - 1].kind.is_modifier() {
            j -= 1;
        }
        j == 0
            || matches!(
                tokens[j - 1].kind,
                SyntaxKind::OpenBrace
                    | SyntaxKind::CloseBrace
                    | SyntaxKind::Semicolon
                    | SyntaxKind::CloseBracket
            )
    }

    /// After `(` or `,` in a declaration parameter list: a parameter
    /// modifier (`ref`, `out`, `in`, `params`) may appear.
    pub fn is_parameter_modifier_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        match self.target_token_kind() {
            Some(SyntaxKind::OpenParen) => self
                .enclosing_declaration_paren()
                .is_some_and(|p| Some(p) == self.target_index()),
            Some(SyntaxKind::Comma) => self.enclosing_declaration_paren().is_some(),
            _ => false,
        }
    }

    /// A parameter's type may appear here: at a parameter-modifier slot
    /// or right after a parameter modifier.
    pub fn is_parameter_type_context(&self) -> bool {
        if self.is_parameter_modifier_context() {
            return true;
        }
        matches!(
            self.target_token_kind(),
            Some(
                SyntaxKind::RefKeyword
                    | SyntaxKind::OutKeyword
                    | SyntaxKind::InKeyword
                    | SyntaxKind::ParamsKeyword
            )
        ) && self.enclosing_declaration_paren().is_some()
    }

    /// Inside `catch (` before the exception type.
    fn is_catch_declaration_context(&self) -> bool {
        let Some(i) = self.target_index() else {
            return false;
        };
        self.tokens()[i].kind == SyntaxKind::OpenParen
            && i > 0
            && self.tokens()[i - 1].kind == SyntaxKind::CatchKeyword
    }

    /// Right after the `}` of a `try` or `catch` block.
    pub fn is_catch_or_finally_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        let Some(i) = self.target_index() else {
            return false;
        };
        if self.tokens()[i].kind != SyntaxKind::CloseBrace {
            return false;
        }
        // The frame popped by this `}` is the top of the stack built just
        // before it.
        let closed = build_scopes(self.tokens(), i);
        matches!(
            closed.last().map(|f| f.kind),
            Some(ScopeKind::Try | ScopeKind::Catch)
        )
    }

    /// Right after the body of an `if` statement, where `else` fits.
    pub fn is_else_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        let Some(i) = self.target_index() else {
            return false;
        };
        let tokens = self.tokens();
        match tokens[i].kind {
            SyntaxKind::CloseBrace => {
                let closed = build_scopes(tokens, i);
                matches!(closed.last().map(|f| f.kind), Some(ScopeKind::If))
            }
            SyntaxKind::Semicolon => {
                // Single-statement body: scan back to the boundary that
                // started the statement and see whether `if (` governs it.
                let mut depth = 0i32;
                for j in (0..i).rev() {
                    match tokens[j].kind {
                        SyntaxKind::CloseParen => depth += 1,
                        SyntaxKind::OpenParen => depth -= 1,
                        SyntaxKind::OpenBrace
                        | SyntaxKind::CloseBrace
                        | SyntaxKind::Semicolon
                            if depth == 0 =>
                        {
                            let mut k = j + 1;
                            if tokens[k].kind == SyntaxKind::ElseKeyword {
                                k += 1;
                            }
                            return tokens[k].kind == SyntaxKind::IfKeyword;
                        }
                        _ => {}
                    }
                }
                // The statement starts the file.
                let mut k = 0;
                if tokens[k].kind == SyntaxKind::ElseKeyword {
                    k += 1;
                }
                tokens[k].kind == SyntaxKind::IfKeyword
            }
            _ => false,
        }
    }

    /// Walk the scope stack from the caret inward-out until the member
    /// boundary, looking for `which`.
    fn inside_frame_within_member(&self, which: &[ScopeKind]) -> bool {
        for frame in self.scopes().iter().rev() {
            if which.contains(&frame.kind) {
                return true;
            }
            if frame.kind == ScopeKind::Member {
                return false;
            }
        }
        false
    }

    /// Inside a loop body (within the current member).
    pub fn is_inside_loop(&self) -> bool {
        self.inside_frame_within_member(&[ScopeKind::Loop, ScopeKind::DoLoop])
    }

    /// Inside a `switch` body (within the current member).
    pub fn is_inside_switch(&self) -> bool {
        self.inside_frame_within_member(&[ScopeKind::Switch])
    }

    /// Directly inside the `switch` braces where `case`/`default` labels
    /// go.
    pub fn is_switch_label_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        self.is_inside_switch()
            && (self.follows_statement_start()
                || self.target_token_kind() == Some(SyntaxKind::OpenBrace))
    }

    /// After `goto`, where a label name (or `case`) goes.
    pub fn is_label_context(&self) -> bool {
        !self.is_in_non_user_code()
            && self.target_token_kind() == Some(SyntaxKind::GotoKeyword)
    }

    /// Enclosing member body exists and is not static, inside a class or
    /// struct: `this`/`base` are meaningful.
    pub fn is_instance_context(&self) -> bool {
        let mut saw_member: Option<bool> = None;
        for frame in self.scopes().iter().rev() {
            match frame.kind {
                ScopeKind::Member if saw_member.is_none() => {
                    saw_member = Some(frame.is_static);
                }
                ScopeKind::Type(TypeKind::Class | TypeKind::Struct) => {
                    return saw_member == Some(false);
                }
                ScopeKind::Type(_) | ScopeKind::Namespace => return false,
                _ => {}
            }
        }
        false
    }

    /// Enclosing member (or lambda) carries `async`.
    pub fn is_async_context(&self) -> bool {
        self.scopes()
            .iter()
            .rev()
            .find(|f| f.kind == ScopeKind::Member)
            .is_some_and(|f| f.is_async)
    }

    /// Directly inside an `enum` body.
    pub fn is_enum_body(&self) -> bool {
        matches!(self.innermost_scope(), Some(ScopeKind::Type(TypeKind::Enum)))
    }

    /// Inside any member body (for `yield`, which is illegal at top
    /// level).
    pub fn is_inside_member_body(&self) -> bool {
        self.scopes().iter().any(|f| f.kind == ScopeKind::Member)
    }

    /// After a line-leading `#`.
    pub fn is_preprocessor_directive_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        self.target_token()
            .is_some_and(|t| t.kind == SyntaxKind::Hash && t.preceded_by_line_break)
    }

    /// After `[` at a declaration position: an attribute name.
    pub fn is_attribute_context(&self) -> bool {
        let Some(i) = self.target_index() else {
            return false;
        };
        if self.tokens()[i].kind != SyntaxKind::OpenBracket {
            return false;
        }
        i == 0
            || matches!(
                self.tokens()[i - 1].kind,
                SyntaxKind::OpenBrace
                    | SyntaxKind::CloseBrace
                    | SyntaxKind::Semicolon
                    | SyntaxKind::CloseBracket
            )
    }

    /// The caret follows something an infix operator keyword (`is`,
    /// `as`) could attach to: an identifier, a closed paren/bracket, a
    /// literal keyword, `this`, or `base`.
    pub fn is_postfix_operator_context(&self) -> bool {
        if self.is_in_non_user_code() || self.follows_statement_start() {
            return false;
        }
        if !self.innermost_scope().is_some_and(ScopeKind::is_executable) {
            return false;
        }
        matches!(
            self.target_token_kind(),
            Some(
                SyntaxKind::Identifier
                    | SyntaxKind::CloseParen
                    | SyntaxKind::CloseBracket
                    | SyntaxKind::ThisKeyword
                    | SyntaxKind::BaseKeyword
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::TrueKeyword
                    | SyntaxKind::FalseKeyword
                    | SyntaxKind::NullKeyword
            )
        )
    }

    /// After the iteration variable of `foreach (var x `, where `in`
    /// goes.
    pub fn is_foreach_in_context(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        if self.target_token_kind() != Some(SyntaxKind::Identifier) {
            return false;
        }
        let Some(target) = self.target_index() else {
            return false;
        };
        let tokens = self.tokens();
        let mut depth = 0i32;
        for j in (0..=target).rev() {
            match tokens[j].kind {
                SyntaxKind::CloseParen => depth += 1,
                SyntaxKind::OpenParen => {
                    if depth == 0 {
                        return j > 0 && tokens[j - 1].kind == SyntaxKind::ForeachKeyword;
                    }
                    depth -= 1;
                }
                SyntaxKind::OpenBrace | SyntaxKind::CloseBrace | SyntaxKind::Semicolon => {
                    return false;
                }
                _ => {}
            }
        }
        false
    }

    /// Right after the `}` of a `do` body, where `while` goes.
    pub fn is_do_statement_close(&self) -> bool {
        if self.is_in_non_user_code() {
            return false;
        }
        let Some(i) = self.target_index() else {
            return false;
        };
        if self.tokens()[i].kind != SyntaxKind::CloseBrace {
            return false;
        }
        let closed = build_scopes(self.tokens(), i);
        matches!(closed.last().map(|f| f.kind), Some(ScopeKind::DoLoop))
    }

    /// A local variable declaration may start here, including the
    /// initializer slot of `for (` and the resource of `using (` /
    /// `foreach (`.
    pub fn is_local_variable_declaration_context(&self) -> bool {
        if self.is_statement_context() || self.is_global_statement_context() {
            return true;
        }
        if self.is_in_non_user_code() {
            return false;
        }
        if self.target_token_kind() == Some(SyntaxKind::OpenParen)
            && let Some(i) = self.target_index()
            && i > 0
        {
            return matches!(
                self.tokens()[i - 1].kind,
                SyntaxKind::ForKeyword | SyntaxKind::ForeachKeyword | SyntaxKind::UsingKeyword
            );
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::SyntaxContext;
    use crate::test_util::split_marker;

    fn ctx(marked: &str) -> (String, u32) {
        split_marker(marked)
    }

    macro_rules! assert_ctx {
        ($marked:expr, $pred:ident) => {{
            let (src, pos) = ctx($marked);
            let context = SyntaxContext::build(&src, pos);
            assert!(context.$pred(), "{} should hold at: {}", stringify!($pred), $marked);
        }};
        ($marked:expr, !$pred:ident) => {{
            let (src, pos) = ctx($marked);
            let context = SyntaxContext::build(&src, pos);
            assert!(
                !context.$pred(),
                "{} should not hold at: {}",
                stringify!($pred),
                $marked
            );
        }};
    }

    #[test]
    fn test_global_statement_context() {
        assert_ctx!("@@", is_global_statement_context);
        assert_ctx!("int x = 1; @@", is_global_statement_context);
        assert_ctx!("class C { @@ }", !is_global_statement_context);
    }

    #[test]
    fn test_statement_context_in_method() {
        assert_ctx!("class C { void M() { @@ } }", is_statement_context);
        assert_ctx!("class C { void M() { int x = 1; @@ } }", is_statement_context);
        assert_ctx!("class C { void M() { if (x) @@ } }", is_statement_context);
        assert_ctx!("class C { @@ }", !is_statement_context);
        assert_ctx!("class C { void M() { var x = @@ } }", !is_statement_context);
    }

    #[test]
    fn test_member_declaration_context() {
        assert_ctx!("class C { @@ }", is_member_declaration_context);
        assert_ctx!("class C { public @@ }", is_member_declaration_context);
        assert_ctx!("struct S { @@ }", is_member_declaration_context);
        assert_ctx!("interface I { @@ }", is_member_declaration_context);
        assert_ctx!("enum E { @@ }", !is_member_declaration_context);
        assert_ctx!("class C { void M() { @@ } }", !is_member_declaration_context);
    }

    #[test]
    fn test_type_declaration_context() {
        assert_ctx!("@@", is_type_declaration_context);
        assert_ctx!("namespace N { @@ }", is_type_declaration_context);
        assert_ctx!("namespace N { public @@ }", is_type_declaration_context);
        assert_ctx!("class C { @@ }", is_type_declaration_context); // nested
        assert_ctx!("class C { void M() { @@ } }", !is_type_declaration_context);
    }

    #[test]
    fn test_namespace_context() {
        assert_ctx!("@@", is_namespace_context);
        assert_ctx!("using System; @@", is_namespace_context);
        assert_ctx!("namespace N { @@ }", is_namespace_context);
        assert_ctx!("public @@", !is_namespace_context);
        assert_ctx!("class C { @@ }", !is_namespace_context);
    }

    #[test]
    fn test_expression_context() {
        assert_ctx!("class C { void M() { var x = @@ } }", is_expression_context);
        assert_ctx!("class C { void M() { F(@@ } }", is_expression_context);
        assert_ctx!("class C { void M() { return @@ } }", is_expression_context);
        assert_ctx!("class C { void M() { if (a && @@ } }", is_expression_context);
        assert_ctx!("class C { @@ }", !is_expression_context);
    }

    #[test]
    fn test_type_context() {
        assert_ctx!("class C { void M() { if (x is @@ } }", is_type_context);
        assert_ctx!("class C { void M() { var y = x as @@ } }", is_type_context);
        assert_ctx!("class C { void M() { var y = new @@ } }", is_type_context);
        assert_ctx!("class C { void M() { var t = typeof(@@ } }", is_type_context);
        assert_ctx!("class C { public @@ }", is_type_context);
        assert_ctx!("class C { void M(@@ }", is_type_context);
    }

    #[test]
    fn test_parameter_modifier_context() {
        assert_ctx!("class C { void M(@@ }", is_parameter_modifier_context);
        assert_ctx!("class C { void M(int a, @@ }", is_parameter_modifier_context);
        // A call argument list is not a parameter list.
        assert_ctx!("class C { void M() { F(@@ } }", !is_parameter_modifier_context);
        assert_ctx!("class C { void M() { x.F(1, @@ } }", !is_parameter_modifier_context);
    }

    #[test]
    fn test_parameter_modifier_context_in_constructor() {
        assert_ctx!("class C { public C(@@ }", is_parameter_modifier_context);
        assert_ctx!("class C { protected internal C(@@ }", is_parameter_modifier_context);
        assert_ctx!("class C { static C(@@ }", is_parameter_modifier_context);
        // `new` is a modifier too, but here it starts an object creation.
        assert_ctx!(
            "class C { void M() { var x = new C(@@ } }",
            !is_parameter_modifier_context
        );
    }

    #[test]
    fn test_catch_or_finally_context() {
        assert_ctx!("class C { void M() { try { } @@ } }", is_catch_or_finally_context);
        assert_ctx!(
            "class C { void M() { try { } catch { } @@ } }",
            is_catch_or_finally_context
        );
        assert_ctx!("class C { void M() { if (x) { } @@ } }", !is_catch_or_finally_context);
    }

    #[test]
    fn test_else_context() {
        assert_ctx!("class C { void M() { if (x) { } @@ } }", is_else_context);
        assert_ctx!("class C { void M() { if (x) F(); @@ } }", is_else_context);
        assert_ctx!(
            "class C { void M() { if (a) { } else if (b) F(); @@ } }",
            is_else_context
        );
        assert_ctx!("class C { void M() { while (x) { } @@ } }", !is_else_context);
        assert_ctx!("class C { void M() { F(); @@ } }", !is_else_context);
    }

    #[test]
    fn test_loop_and_switch_enclosure() {
        assert_ctx!("class C { void M() { while (x) { @@ } } }", is_inside_loop);
        assert_ctx!(
            "class C { void M() { for (;;) { if (y) { @@ } } } }",
            is_inside_loop
        );
        assert_ctx!("class C { void M() { @@ } }", !is_inside_loop);
        assert_ctx!("class C { void M() { switch (x) { @@ } } }", is_inside_switch);
        // A lambda boundary cuts off the enclosing loop.
        assert_ctx!(
            "class C { void M() { while (x) { F(() => { @@ } } } }",
            !is_inside_loop
        );
    }

    #[test]
    fn test_switch_label_context() {
        assert_ctx!("class C { void M() { switch (x) { @@ } } }", is_switch_label_context);
        assert_ctx!(
            "class C { void M() { switch (x) { case 1: break; @@ } } }",
            is_switch_label_context
        );
        assert_ctx!("class C { void M() { @@ } }", !is_switch_label_context);
    }

    #[test]
    fn test_instance_context() {
        assert_ctx!("class C { void M() { @@ } }", is_instance_context);
        assert_ctx!("class C { static void M() { @@ } }", !is_instance_context);
        assert_ctx!("struct S { void M() { @@ } }", is_instance_context);
        assert_ctx!("@@", !is_instance_context);
        assert_ctx!("class C { @@ }", !is_instance_context);
    }

    #[test]
    fn test_async_context() {
        assert_ctx!("class C { async void M() { @@ } }", is_async_context);
        assert_ctx!("class C { void M() { @@ } }", !is_async_context);
        assert_ctx!(
            "class C { async void M() { F(() => { @@ } } }",
            is_async_context
        );
    }

    #[test]
    fn test_preprocessor_context() {
        assert_ctx!("#@@", is_preprocessor_directive_context);
        assert_ctx!("int x;\n#@@", is_preprocessor_directive_context);
        assert_ctx!("int x; @@", !is_preprocessor_directive_context);
    }

    #[test]
    fn test_attribute_context() {
        assert_ctx!("class C { [@@ }", is_attribute_context);
        assert_ctx!("[@@", is_attribute_context);
        assert_ctx!("class C { void M() { var x = a[@@ } }", !is_attribute_context);
    }

    #[test]
    fn test_label_context() {
        assert_ctx!("class C { void M() { goto @@ } }", is_label_context);
        assert_ctx!("class C { void M() { @@ } }", !is_label_context);
    }

    #[test]
    fn test_local_variable_declaration_context() {
        assert_ctx!("class C { void M() { @@ } }", is_local_variable_declaration_context);
        assert_ctx!(
            "class C { void M() { for (@@ } }",
            is_local_variable_declaration_context
        );
        assert_ctx!(
            "class C { void M() { foreach (@@ } }",
            is_local_variable_declaration_context
        );
        assert_ctx!(
            "class C { void M() { using (@@ } }",
            is_local_variable_declaration_context
        );
    }

    #[test]
    fn test_enum_body() {
        assert_ctx!("enum E { @@ }", is_enum_body);
        assert_ctx!("class C { @@ }", !is_enum_body);
    }

    #[test]
    fn test_postfix_operator_context() {
        assert_ctx!("class C { void M() { if (x @@ } }", is_postfix_operator_context);
        assert_ctx!(
            "class C { void M() { var y = (a + b) @@ } }",
            is_postfix_operator_context
        );
        assert_ctx!("class C { void M() { var y = this @@ } }", is_postfix_operator_context);
        assert_ctx!("class C { void M() { @@ } }", !is_postfix_operator_context);
        assert_ctx!("class C { int x @@ }", !is_postfix_operator_context);
    }

    #[test]
    fn test_foreach_in_context() {
        assert_ctx!(
            "class C { void M() { foreach (var item @@ } }",
            is_foreach_in_context
        );
        assert_ctx!(
            "class C { void M() { foreach (int i @@ } }",
            is_foreach_in_context
        );
        assert_ctx!("class C { void M() { for (var i @@ } }", !is_foreach_in_context);
        assert_ctx!("class C { void M() { var item @@ } }", !is_foreach_in_context);
    }

    #[test]
    fn test_do_statement_close() {
        assert_ctx!("class C { void M() { do { } @@ } }", is_do_statement_close);
        assert_ctx!(
            "class C { void M() { do { F(); } @@ } }",
            is_do_statement_close
        );
        assert_ctx!("class C { void M() { while (x) { } @@ } }", !is_do_statement_close);
        assert_ctx!("class C { void M() { @@ } }", !is_do_statement_close);
    }

    #[test]
    fn test_non_user_code_suppresses_everything() {
        assert_ctx!("class C { // @@\n }", !is_member_declaration_context);
        assert_ctx!("class C { void M() { var s = \"@@\"; } }", !is_statement_context);
    }
}
