//! Edge case tests for lumec-lex

#[cfg(test)]
mod tests {
    use crate::{scan, LexErrorKind, OperatorKind, Token};

    fn lex_all(source: &str) -> Vec<Token> {
        scan(source, "test.lm").unwrap()
    }

    fn operator(kind: OperatorKind, lexeme: &'static str) -> Token {
        Token::Operator { kind, lexeme }
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(
            t[0],
            Token::Identifier {
                lexeme: "x".to_owned()
            }
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {name} = 1"));
        assert!(t.contains(&Token::Identifier {
            lexeme: name.clone()
        }));
    }

    #[test]
    fn test_edge_underscore_identifiers() {
        let t = lex_all("_ _x x_1");
        assert_eq!(
            t,
            vec![
                Token::Identifier {
                    lexeme: "_".to_owned()
                },
                Token::Identifier {
                    lexeme: "_x".to_owned()
                },
                Token::Identifier {
                    lexeme: "x_1".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("func let if");
        assert_eq!(t[0], operator(OperatorKind::Func, "func"));
        assert_eq!(t[1], operator(OperatorKind::Let, "let"));
        assert_eq!(t[2], operator(OperatorKind::If, "if"));
    }

    #[test]
    fn test_edge_hex_bounds() {
        let t = lex_all("0x0 0xff");
        assert_eq!(integer_value(&t[0]), 0);
        assert_eq!(integer_value(&t[1]), 255);
    }

    #[test]
    fn test_edge_binary() {
        let t = lex_all("0b0 0b1010");
        assert_eq!(integer_value(&t[1]), 10);
    }

    #[test]
    fn test_edge_octal() {
        let t = lex_all("0o0 0o77");
        assert_eq!(integer_value(&t[1]), 63);
    }

    #[test]
    fn test_edge_max_u64() {
        let t = lex_all("18446744073709551615 0xffffffffffffffff");
        assert_eq!(integer_value(&t[0]), u64::MAX);
        assert_eq!(integer_value(&t[1]), u64::MAX);
    }

    #[test]
    fn test_edge_overflow_past_u64() {
        let err = scan("18446744073709551616", "test.lm").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::IntegerOverflow);
    }

    #[test]
    fn test_edge_lone_zero() {
        assert_eq!(integer_value(&lex_all("0")[0]), 0);
    }

    #[test]
    fn test_edge_leading_zero_rejected() {
        let err = scan("0345", "test.lm").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidLeadingZero);
    }

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!(
            t[0],
            Token::StringLiteral {
                value: String::new()
            }
        );
    }

    #[test]
    fn test_edge_string_with_every_escape() {
        let t = lex_all(r#""\n\t\r\"\'\\""#);
        assert_eq!(
            t[0],
            Token::StringLiteral {
                value: "\n\t\r\"'\\".to_owned()
            }
        );
    }

    #[test]
    fn test_edge_all_simple_operators() {
        let t = lex_all("+ - * / % == != < > <= >= && || !");
        assert!(t.contains(&operator(OperatorKind::Plus, "+")));
        assert!(t.contains(&operator(OperatorKind::DoubleEquals, "==")));
        assert!(t.contains(&operator(OperatorKind::NotEquals, "!=")));
        assert!(t.contains(&operator(OperatorKind::LogicalAnd, "&&")));
        assert!(t.contains(&operator(OperatorKind::ExclamationMark, "!")));
    }

    #[test]
    fn test_edge_arrows() {
        let t = lex_all("<- ->");
        assert_eq!(t[0], operator(OperatorKind::LeftArrow, "<-"));
        assert_eq!(t[1], operator(OperatorKind::RightArrow, "->"));
    }

    #[test]
    fn test_edge_increment_decrement() {
        let t = lex_all("i++ --j");
        assert_eq!(
            t,
            vec![
                Token::Identifier {
                    lexeme: "i".to_owned()
                },
                operator(OperatorKind::Increment, "++"),
                operator(OperatorKind::Decrement, "--"),
                Token::Identifier {
                    lexeme: "j".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_edge_crlf_lines() {
        // `lines` strips the carriage return together with the newline.
        let t = lex_all("var\r\nx");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0], operator(OperatorKind::Var, "var"));
    }

    #[test]
    fn test_edge_string_spans_no_lines() {
        let err = scan("\"split\nacross\"", "test.lm").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedLiteral);
    }

    #[test]
    fn test_edge_tabs_between_tokens() {
        let t = lex_all("\tvar\t\tx\t");
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_edge_operator_at_end_of_input() {
        let t = lex_all("x +");
        assert_eq!(t[1], operator(OperatorKind::Plus, "+"));
    }

    fn integer_value(token: &Token) -> u64 {
        match token {
            Token::IntegerLiteral { value, .. } => *value,
            other => panic!("expected integer literal, got {other:?}"),
        }
    }
}
