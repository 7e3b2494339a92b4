// Keycode expression fallback
// Evaluates free-form keycode text that is not a registered id

use crate::error::ExpressionError;
use crate::protocol::{mods, LayerAction, ProtocolTable};

/// Name resolution available to an expression parser.
///
/// Implemented by a registry generation, so every lookup made while parsing
/// one expression sees the same snapshot.
pub trait SymbolTable {
    /// Raw keycode table of the active protocol.
    fn table(&self) -> &'static ProtocolTable;

    /// Raw value of a keycode id or alias.
    fn symbol(&self, name: &str) -> Option<u16>;

    /// Raw outer value of a masked prefix such as `LSFT` or `LT3`.
    fn masked_outer(&self, prefix: &str) -> Option<u16>;
}

/// Turns keycode expression text into a raw value.
pub trait ExpressionParser: Send + Sync {
    fn parse(&self, text: &str, symbols: &dyn SymbolTable) -> Result<u16, ExpressionError>;
}

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Number(i64),
    Identifier(String),
    Call(String, Vec<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BinOp {
    Or,
    Xor,
    And,
    ShiftLeft,
    ShiftRight,
    Add,
    Subtract,
    Multiply,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            BinOp::Or => "|",
            BinOp::Xor => "^",
            BinOp::And => "&",
            BinOp::ShiftLeft => "<<",
            BinOp::ShiftRight => ">>",
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
        }
    }
}

fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary(op, Box::new(left), Box::new(right))
}

peg::parser! {
    grammar keycode_parser() for str {
        pub(super) rule expression() -> Expr
         = _ e:bitwise_or() { e }

        #[cache_left_rec]
        rule bitwise_or() -> Expr
         = left:bitwise_or() "|" _ right:bitwise_xor() { binary(BinOp::Or, left, right) }
         / bitwise_xor()

        #[cache_left_rec]
        rule bitwise_xor() -> Expr
         = left:bitwise_xor() "^" _ right:bitwise_and() { binary(BinOp::Xor, left, right) }
         / bitwise_and()

        #[cache_left_rec]
        rule bitwise_and() -> Expr
         = left:bitwise_and() "&" _ right:shift() { binary(BinOp::And, left, right) }
         / shift()

        #[cache_left_rec]
        rule shift() -> Expr
         = left:shift() "<<" _ right:additive() { binary(BinOp::ShiftLeft, left, right) }
         / left:shift() ">>" _ right:additive() { binary(BinOp::ShiftRight, left, right) }
         / additive()

        #[cache_left_rec]
        rule additive() -> Expr
         = left:additive() "+" _ right:multiplicative() { binary(BinOp::Add, left, right) }
         / left:additive() "-" _ right:multiplicative() { binary(BinOp::Subtract, left, right) }
         / multiplicative()

        #[cache_left_rec]
        rule multiplicative() -> Expr
         = left:multiplicative() "*" _ right:primary() { binary(BinOp::Multiply, left, right) }
         / primary()

        rule primary() -> Expr
         = number()
         / name:identifier() _ "(" _ args:(bitwise_or() ** ("," _)) ")" _ { Expr::Call(name.to_owned(), args) }
         / name:identifier() _ { Expr::Identifier(name.to_owned()) }
         / "(" _ e:bitwise_or() ")" _ { e }

        rule number() -> Expr
         = "0" ['x' | 'X'] n:$(['0'..='9' | 'a'..='f' | 'A'..='F']+) _
         {? i64::from_str_radix(n, 16).map(Expr::Number).map_err(|_| "hexadecimal number") }
         / n:$(['0'..='9']+) _
         {? n.parse().map(Expr::Number).map_err(|_| "decimal number") }

        rule identifier() -> &'input str
         = quiet!{$(['_' | 'a'..='z' | 'A'..='Z']['_' | 'a'..='z' | 'A'..='Z' | '0'..='9']*)}
         / expected!("identifier")

        rule _ = quiet!{[' ' | '\t' | '\r' | '\n']*}
    }
}

/// The bundled QMK-style expression evaluator.
///
/// Accepts numbers, keycode ids, `MOD_*` constants, C operators and the
/// usual keycode functions:
///
/// ```text
/// LSFT(KC_A) | 0x100
/// LT(2, KC_SPACE)
/// MT(MOD_LCTL | MOD_LSFT, KC_ESCAPE)
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultExpressionParser;

impl ExpressionParser for DefaultExpressionParser {
    fn parse(&self, text: &str, symbols: &dyn SymbolTable) -> Result<u16, ExpressionError> {
        check_bounds(text)?;
        let expr = keycode_parser::expression(text).map_err(|e| ExpressionError::Syntax {
            text: text.to_string(),
            message: e.to_string(),
        })?;
        let value = Evaluator { symbols }.eval(&expr)?;
        to_u16(text, value)
    }
}

/// Longest expression text accepted.
const MAX_EXPRESSION_LEN: usize = 256;

/// Deepest parenthesis nesting accepted.
const MAX_NESTING: usize = 64;

/// Reject text whose parse or evaluation would recurse too deep.
fn check_bounds(text: &str) -> Result<(), ExpressionError> {
    let syntax = |message: String| ExpressionError::Syntax {
        text: text.chars().take(32).collect(),
        message,
    };

    if text.len() > MAX_EXPRESSION_LEN {
        return Err(syntax(format!(
            "expression is {} bytes long, limit is {MAX_EXPRESSION_LEN}",
            text.len()
        )));
    }

    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(syntax(format!("parentheses nested deeper than {MAX_NESTING}")));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn to_u16(context: &str, value: i64) -> Result<u16, ExpressionError> {
    u16::try_from(value).map_err(|_| ExpressionError::OutOfRange {
        context: context.to_string(),
        value,
    })
}

struct Evaluator<'a> {
    symbols: &'a dyn SymbolTable,
}

impl Evaluator<'_> {
    fn eval(&self, expr: &Expr) -> Result<i64, ExpressionError> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Identifier(name) => self
                .symbols
                .symbol(name)
                .or_else(|| mods::by_name(name).map(u16::from))
                .map(i64::from)
                .ok_or_else(|| ExpressionError::UnknownIdentifier(name.clone())),
            Expr::Binary(op, left, right) => {
                let (l, r) = (self.eval(left)?, self.eval(right)?);
                let out_of_range = || ExpressionError::OutOfRange {
                    context: op.symbol().to_string(),
                    value: r,
                };
                match op {
                    BinOp::Or => Ok(l | r),
                    BinOp::Xor => Ok(l ^ r),
                    BinOp::And => Ok(l & r),
                    BinOp::ShiftLeft => u32::try_from(r)
                        .ok()
                        .and_then(|r| l.checked_shl(r))
                        .ok_or_else(out_of_range),
                    BinOp::ShiftRight => u32::try_from(r)
                        .ok()
                        .and_then(|r| l.checked_shr(r))
                        .ok_or_else(out_of_range),
                    BinOp::Add => l.checked_add(r).ok_or_else(out_of_range),
                    BinOp::Subtract => l.checked_sub(r).ok_or_else(out_of_range),
                    BinOp::Multiply => l.checked_mul(r).ok_or_else(out_of_range),
                }
            }
            Expr::Call(name, args) => self.call(name, args),
        }
    }

    fn call(&self, name: &str, args: &[Expr]) -> Result<i64, ExpressionError> {
        let table = self.symbols.table();
        let values = args.iter().map(|a| self.eval(a)).collect::<Result<Vec<_>, _>>()?;

        if let Some(outer) = self.symbols.masked_outer(name) {
            let [inner] = arity::<1>(name, &values)?;
            return Ok(table.apply_mask(outer, to_u16(name, inner)?).into());
        }

        let raw = match name {
            "LT" => {
                let [layer, kc] = arity::<2>(name, &values)?;
                table.layer_tap(to_u16(name, layer)?, to_u16(name, kc)?)
            }
            "MT" => {
                let [bits, kc] = arity::<2>(name, &values)?;
                Some(table.mod_tap(to_u16(name, bits)?, to_u16(name, kc)?))
            }
            "OSM" => {
                let [bits] = arity::<1>(name, &values)?;
                Some(table.one_shot_mod(to_u16(name, bits)?))
            }
            "TD" => {
                let [n] = arity::<1>(name, &values)?;
                table.tap_dance(to_u16(name, n)?)
            }
            "M" => {
                let [n] = arity::<1>(name, &values)?;
                table.macro_keycode(to_u16(name, n)?)
            }
            _ => {
                let action = LayerAction::from_prefix(name)
                    .ok_or_else(|| ExpressionError::UnknownFunction(name.to_string()))?;
                let [layer] = arity::<1>(name, &values)?;
                table.layer_action(action, to_u16(name, layer)?)
            }
        };

        raw.map(i64::from).ok_or_else(|| ExpressionError::OutOfRange {
            context: name.to_string(),
            value: values.first().copied().unwrap_or_default(),
        })
    }
}

fn arity<const N: usize>(name: &str, values: &[i64]) -> Result<[i64; N], ExpressionError> {
    <[i64; N]>::try_from(values).map_err(|_| ExpressionError::Syntax {
        text: name.to_string(),
        message: format!("expected {N} argument(s), got {}", values.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Protocol;

    struct TableSymbols(&'static ProtocolTable);

    impl SymbolTable for TableSymbols {
        fn table(&self) -> &'static ProtocolTable {
            self.0
        }

        fn symbol(&self, name: &str) -> Option<u16> {
            self.0.get(name)
        }

        fn masked_outer(&self, prefix: &str) -> Option<u16> {
            self.0
                .get(&format!("{prefix}(kc)"))
                .filter(|raw| self.0.is_masked(*raw))
        }
    }

    fn parse(protocol: Protocol, text: &str) -> Result<u16, ExpressionError> {
        DefaultExpressionParser.parse(text, &TableSymbols(protocol.table()))
    }

    // --- Grammar tests ---

    #[test]
    fn test_numbers() {
        assert_eq!(parse(Protocol::V6, "0x7FFF"), Ok(0x7FFF));
        assert_eq!(parse(Protocol::V6, "0x2e8"), Ok(0x2E8));
        assert_eq!(parse(Protocol::V6, "42"), Ok(42));
        assert_eq!(parse(Protocol::V6, "  7  "), Ok(7));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parse(Protocol::V6, "1 | 2 & 3"), Ok(3));
        assert_eq!(parse(Protocol::V6, "1 + 2 * 3"), Ok(7));
        assert_eq!(parse(Protocol::V6, "1 << 2 + 1"), Ok(8));
        assert_eq!(parse(Protocol::V6, "(1 | 2) & 2"), Ok(2));
        assert_eq!(parse(Protocol::V6, "10 - 3 - 2"), Ok(5));
        assert_eq!(parse(Protocol::V6, "6 ^ 3"), Ok(5));
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(parse(Protocol::V6, "KC_A"), Ok(0x04));
        assert_eq!(parse(Protocol::V6, "KC_A | 0x200"), Ok(0x0204));
        assert_eq!(parse(Protocol::V6, "MOD_RSFT"), Ok(0x12));
    }

    // --- Function tests ---

    #[test]
    fn test_masked_calls() {
        assert_eq!(parse(Protocol::V6, "LSFT(KC_A)"), Ok(0x0204));
        assert_eq!(parse(Protocol::V6, "LCTL(LSFT(KC_A))"), Ok(0x0304));
        assert_eq!(parse(Protocol::V6, "LT3(KC_SPACE)"), Ok(0x432C));
        assert_eq!(parse(Protocol::V5, "LSFT_T(KC_A)"), Ok(0x6204));
        assert_eq!(parse(Protocol::V6, "LSFT_T(KC_A)"), Ok(0x2204));
        // Only the inner low byte survives a non-modifier mask
        assert_eq!(parse(Protocol::V6, "LT1(LSFT(KC_A))"), Ok(0x4104));
    }

    #[test]
    fn test_layer_calls() {
        assert_eq!(parse(Protocol::V6, "MO(3)"), Ok(0x5223));
        assert_eq!(parse(Protocol::V5, "MO(3)"), Ok(0x5103));
        assert_eq!(parse(Protocol::V6, "TO(31)"), Ok(0x521F));
        assert_eq!(parse(Protocol::V6, "LT(2, KC_A)"), Ok(0x4204));
        assert_eq!(parse(Protocol::V6, "MT(MOD_LCTL | MOD_LSFT, KC_ESCAPE)"), Ok(0x2329));
        assert_eq!(parse(Protocol::V6, "OSM(MOD_LSFT)"), Ok(0x52A2));
        assert_eq!(parse(Protocol::V6, "TD(5)"), Ok(0x5705));
        assert_eq!(parse(Protocol::V6, "M(2)"), Ok(0x7702));
    }

    // --- Error tests ---

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(
            parse(Protocol::V6, "KC_BOGUS"),
            Err(ExpressionError::UnknownIdentifier("KC_BOGUS".into()))
        );
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            parse(Protocol::V6, "FOO(1)"),
            Err(ExpressionError::UnknownFunction("FOO".into()))
        );
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(parse(Protocol::V6, "KC_A |"), Err(ExpressionError::Syntax { .. })));
        assert!(matches!(parse(Protocol::V6, ""), Err(ExpressionError::Syntax { .. })));
        assert!(matches!(parse(Protocol::V6, "LT(1)"), Err(ExpressionError::Syntax { .. })));
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(parse(Protocol::V6, &nested(MAX_NESTING)), Ok(1));
        assert!(matches!(
            parse(Protocol::V6, &nested(MAX_NESTING + 1)),
            Err(ExpressionError::Syntax { .. })
        ));
        assert!(matches!(parse(Protocol::V6, &nested(10_000)), Err(ExpressionError::Syntax { .. })));

        let calls = format!("{}KC_A{}", "LSFT(".repeat(1_000), ")".repeat(1_000));
        assert!(matches!(parse(Protocol::V6, &calls), Err(ExpressionError::Syntax { .. })));
    }

    #[test]
    fn test_length_limit() {
        let chain = vec!["1"; 50_000].join("+");
        assert!(matches!(parse(Protocol::V6, &chain), Err(ExpressionError::Syntax { .. })));
        let short = vec!["1"; 100].join("+");
        assert_eq!(parse(Protocol::V6, &short), Ok(100));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(parse(Protocol::V6, "0x10000"), Err(ExpressionError::OutOfRange { .. })));
        assert!(matches!(parse(Protocol::V6, "0 - 1"), Err(ExpressionError::OutOfRange { .. })));
        assert!(matches!(parse(Protocol::V5, "MO(16)"), Err(ExpressionError::OutOfRange { .. })));
        assert!(matches!(parse(Protocol::V6, "LT(16, KC_A)"), Err(ExpressionError::OutOfRange { .. })));
        assert!(matches!(parse(Protocol::V6, "1 << 99"), Err(ExpressionError::OutOfRange { .. })));
    }
}
