//! Infix parser for cell definitions.
//!
//! Lowers the embedded expression language to the [`Expr`] tree:
//!
//! ```text
//! union      := intersect ( ('|' | '∨') intersect )*
//! intersect  := unary ( ('^' | '∧') unary )*
//! unary      := ('~' | '¬') unary | INDEX | '(' union ')'
//! ```
//!
//! Region indices are unsigned decimal integers. Whitespace separates
//! tokens and is otherwise ignored.

use crate::{Expr, ExprError};

/// A token in a cell-definition expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Region index (e.g. `12`).
    Index(usize),
    /// Intersection operator `^` / `∧`.
    Intersect,
    /// Union operator `|` / `∨`.
    Union,
    /// Complement operator `~` / `¬`.
    Complement,
    /// Left parenthesis `(`.
    LParen,
    /// Right parenthesis `)`.
    RParen,
}

impl Token {
    fn describe(self) -> &'static str {
        match self {
            Token::Index(_) => "region index",
            Token::Intersect => "'^'",
            Token::Union => "'|'",
            Token::Complement => "'~'",
            Token::LParen => "'('",
            Token::RParen => "')'",
        }
    }
}

/// A token with its byte offset in the source.
#[derive(Debug, Clone, Copy)]
struct SpannedToken {
    token: Token,
    pos: usize,
}

/// Tokenize an expression string.
fn tokenize(input: &str) -> Result<Vec<SpannedToken>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        let token = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '^' | '∧' => Token::Intersect,
            '|' | '∨' => Token::Union,
            '~' | '¬' => Token::Complement,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '0'..='9' => {
                let mut value: usize = 0;
                while let Some(&(_, d)) = chars.peek() {
                    if let Some(digit) = d.to_digit(10) {
                        value = value * 10 + digit as usize;
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(SpannedToken {
                    token: Token::Index(value),
                    pos,
                });
                continue;
            }
            other => return Err(ExprError::UnexpectedChar { pos, ch: other }),
        };
        chars.next();
        tokens.push(SpannedToken { token, pos });
    }

    Ok(tokens)
}

/// Cursor over the token stream.
struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<SpannedToken> {
        let tok = self.tokens.get(self.pos).copied();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// `union := intersect ( '|' intersect )*`
    fn parse_union(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.parse_intersect()?;
        while let Some(tok) = self.peek() {
            if tok.token != Token::Union {
                break;
            }
            self.next();
            let right = self.parse_intersect()?;
            expr = Expr::union(expr, right);
        }
        Ok(expr)
    }

    /// `intersect := unary ( '^' unary )*`
    fn parse_intersect(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.parse_unary()?;
        while let Some(tok) = self.peek() {
            if tok.token != Token::Intersect {
                break;
            }
            self.next();
            let right = self.parse_unary()?;
            expr = Expr::intersection(expr, right);
        }
        Ok(expr)
    }

    /// `unary := '~' unary | INDEX | '(' union ')'`
    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        let tok = self.next().ok_or(ExprError::UnexpectedEnd)?;
        match tok.token {
            Token::Complement => Ok(Expr::complement(self.parse_unary()?)),
            Token::Index(index) => Ok(Expr::region(index)),
            Token::LParen => {
                let inner = self.parse_union()?;
                match self.next() {
                    Some(SpannedToken {
                        token: Token::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(ExprError::UnexpectedToken {
                        pos: other.pos,
                        message: format!("expected ')', found {}", other.token.describe()),
                    }),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            other => Err(ExprError::UnexpectedToken {
                pos: tok.pos,
                message: format!("expected region index, '~', or '(', found {}", other.describe()),
            }),
        }
    }
}

/// Parse a complete cell-definition expression.
pub fn parse(input: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_union()?;
    match parser.peek() {
        Some(tok) => Err(ExprError::TrailingInput { pos: tok.pos }),
        None => Ok(expr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_index() {
        assert_eq!(parse("3").unwrap(), Expr::region(3));
        assert_eq!(parse("  12 ").unwrap(), Expr::region(12));
    }

    #[test]
    fn test_intersection_and_union() {
        assert_eq!(
            parse("0 ^ 1").unwrap(),
            Expr::intersection(Expr::region(0), Expr::region(1))
        );
        assert_eq!(
            parse("0 | 1").unwrap(),
            Expr::union(Expr::region(0), Expr::region(1))
        );
    }

    #[test]
    fn test_precedence() {
        // Intersection binds tighter than union.
        assert_eq!(
            parse("0 | 1 ^ 2").unwrap(),
            Expr::union(
                Expr::region(0),
                Expr::intersection(Expr::region(1), Expr::region(2)),
            )
        );
        // Complement binds tighter than intersection.
        assert_eq!(
            parse("~0 ^ 1").unwrap(),
            Expr::intersection(Expr::complement(Expr::region(0)), Expr::region(1))
        );
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(
            parse("0 ^ 1 ^ 2").unwrap(),
            Expr::intersection(
                Expr::intersection(Expr::region(0), Expr::region(1)),
                Expr::region(2),
            )
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            parse("(0 | 1) ^ 2").unwrap(),
            Expr::intersection(
                Expr::union(Expr::region(0), Expr::region(1)),
                Expr::region(2),
            )
        );
    }

    #[test]
    fn test_nested_complement() {
        assert_eq!(
            parse("~~0").unwrap(),
            Expr::complement(Expr::complement(Expr::region(0)))
        );
        assert_eq!(
            parse("~(0 ^ 1)").unwrap(),
            Expr::complement(Expr::intersection(Expr::region(0), Expr::region(1)))
        );
    }

    #[test]
    fn test_unicode_operators() {
        assert_eq!(parse("0 ∧ 1").unwrap(), parse("0 ^ 1").unwrap());
        assert_eq!(parse("0 ∨ 1").unwrap(), parse("0 | 1").unwrap());
        assert_eq!(parse("¬0").unwrap(), parse("~0").unwrap());
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse("").unwrap_err(), ExprError::UnexpectedEnd);
        assert_eq!(parse("0 ^").unwrap_err(), ExprError::UnexpectedEnd);
        assert_eq!(parse("(0 | 1").unwrap_err(), ExprError::UnexpectedEnd);
        assert!(matches!(
            parse("0 1").unwrap_err(),
            ExprError::TrailingInput { pos: 2 }
        ));
        assert!(matches!(
            parse("0 & 1").unwrap_err(),
            ExprError::UnexpectedChar { ch: '&', .. }
        ));
        assert!(matches!(
            parse("^ 1").unwrap_err(),
            ExprError::UnexpectedToken { .. }
        ));
        assert!(matches!(
            parse("(0 ^ 1 ^").unwrap_err(),
            ExprError::UnexpectedEnd
        ));
    }
}
