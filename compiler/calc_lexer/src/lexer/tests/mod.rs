use super::*;


/// Token kinds of `input`, panicking on lexer errors
fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap_or_else(|e| panic!("failed to tokenize {input:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn num(n: f64) -> TokenKind {
    TokenKind::Number(n)
}

fn op(c: char) -> TokenKind {
    TokenKind::Operator(Operator::from_char(c).unwrap())
}
