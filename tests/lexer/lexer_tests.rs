use garnet::syntax::lexer::Lexer;
use garnet::syntax::token_kind::TokenKind;

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source.as_bytes());
    lexer.tokenize().into_iter().map(|t| t.kind).collect()
}

fn lexed(source: &str) -> Vec<(TokenKind, String)> {
    let bytes = source.as_bytes();
    let mut lexer = Lexer::new(bytes);
    lexer
        .tokenize()
        .iter()
        .map(|t| {
            (
                t.kind,
                String::from_utf8_lossy(t.lexeme(bytes)).into_owned(),
            )
        })
        .collect()
}

#[test]
fn single_byte_operators_and_delimiters() {
    let input = "+ - * ** / % ^ ~ | & < > , ( ) ; [ ] { } .";
    let expected = vec![
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::StarStar,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Caret,
        TokenKind::Tilde,
        TokenKind::Pipe,
        TokenKind::Ampersand,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Comma,
        TokenKind::ParenthesisLeft,
        TokenKind::ParenthesisRight,
        TokenKind::Semicolon,
        TokenKind::BracketLeft,
        TokenKind::BracketRight,
        TokenKind::BraceLeft,
        TokenKind::BraceRight,
        TokenKind::Dot,
        TokenKind::Eof,
    ];
    assert_eq!(kinds(input), expected);
}

#[test]
fn comparison_and_range_operators() {
    let input = "== === != =~ !~ <= >= <=> << >> && || .. ...";
    let expected = vec![
        TokenKind::EqualEqual,
        TokenKind::EqualEqualEqual,
        TokenKind::BangEqual,
        TokenKind::EqualTilde,
        TokenKind::BangTilde,
        TokenKind::LessEqual,
        TokenKind::GreaterEqual,
        TokenKind::LessEqualGreater,
        TokenKind::LessLess,
        TokenKind::GreaterGreater,
        TokenKind::AmpersandAmpersand,
        TokenKind::PipePipe,
        TokenKind::DotDot,
        TokenKind::DotDotDot,
        TokenKind::Eof,
    ];
    assert_eq!(kinds(input), expected);
}

#[test]
fn assignment_operators() {
    let input = "= += -= *= **= /= %= ^= &= |= <<= >>= &&= ||=";
    let expected = vec![
        TokenKind::Equal,
        TokenKind::PlusEqual,
        TokenKind::MinusEqual,
        TokenKind::StarEqual,
        TokenKind::StarStarEqual,
        TokenKind::SlashEqual,
        TokenKind::PercentEqual,
        TokenKind::CaretEqual,
        TokenKind::AmpersandEqual,
        TokenKind::PipeEqual,
        TokenKind::LessLessEqual,
        TokenKind::GreaterGreaterEqual,
        TokenKind::AmpersandAmpersandEqual,
        TokenKind::PipePipeEqual,
        TokenKind::Eof,
    ];
    assert_eq!(kinds(input), expected);
}

#[test]
fn lambda_after_arrow() {
    assert_eq!(
        kinds("-> { 1 }"),
        vec![
            TokenKind::MinusGreater,
            TokenKind::LambdaBegin,
            TokenKind::Integer,
            TokenKind::BraceRight,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords() {
    let input = "alias and begin BEGIN break case class def do else elsif end END \
                 ensure false for if in module next nil not or redo rescue retry \
                 return self super then true undef unless until when while yield \
                 __ENCODING__ __LINE__ __FILE__";
    let expected = vec![
        TokenKind::KeywordAlias,
        TokenKind::KeywordAnd,
        TokenKind::KeywordBegin,
        TokenKind::KeywordBeginUpcase,
        TokenKind::KeywordBreak,
        TokenKind::KeywordCase,
        TokenKind::KeywordClass,
        TokenKind::KeywordDef,
        TokenKind::KeywordDo,
        TokenKind::KeywordElse,
        TokenKind::KeywordElsif,
        TokenKind::KeywordEnd,
        TokenKind::KeywordEndUpcase,
        TokenKind::KeywordEnsure,
        TokenKind::KeywordFalse,
        TokenKind::KeywordFor,
        TokenKind::KeywordIf,
        TokenKind::KeywordIn,
        TokenKind::KeywordModule,
        TokenKind::KeywordNext,
        TokenKind::KeywordNil,
        TokenKind::KeywordNot,
        TokenKind::KeywordOr,
        TokenKind::KeywordRedo,
        TokenKind::KeywordRescue,
        TokenKind::KeywordRetry,
        TokenKind::KeywordReturn,
        TokenKind::KeywordSelf,
        TokenKind::KeywordSuper,
        TokenKind::KeywordThen,
        TokenKind::KeywordTrue,
        TokenKind::KeywordUndef,
        TokenKind::KeywordUnless,
        TokenKind::KeywordUntil,
        TokenKind::KeywordWhen,
        TokenKind::KeywordWhile,
        TokenKind::KeywordYield,
        TokenKind::KeywordEncoding,
        TokenKind::KeywordLine,
        TokenKind::KeywordFile,
        TokenKind::Eof,
    ];
    assert_eq!(kinds(input), expected);
}

#[test]
fn defined_keyword_keeps_its_question_mark() {
    assert_eq!(
        lexed("defined? x"),
        vec![
            (TokenKind::KeywordDefined, "defined?".to_string()),
            (TokenKind::Identifier, "x".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn keywords_after_a_dot_are_method_names() {
    assert_eq!(
        kinds("foo.class"),
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("x.defined?"),
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn predicate_method_definition() {
    let expected = vec![
        (TokenKind::KeywordDef, "def".to_string()),
        (TokenKind::Identifier, "foo!".to_string()),
        (TokenKind::ParenthesisLeft, "(".to_string()),
        (TokenKind::Identifier, "x".to_string()),
        (TokenKind::ParenthesisRight, ")".to_string()),
        (TokenKind::Semicolon, ";".to_string()),
        (TokenKind::Identifier, "x".to_string()),
        (TokenKind::Dot, ".".to_string()),
        (TokenKind::Identifier, "class".to_string()),
        (TokenKind::Semicolon, ";".to_string()),
        (TokenKind::KeywordEnd, "end".to_string()),
        (TokenKind::Eof, String::new()),
    ];
    assert_eq!(lexed("def foo!(x); x.class; end"), expected);
}

#[test]
fn predicate_suffix_backs_off_before_equal() {
    // `foo!=` is a comparison, not a predicate method name
    assert_eq!(
        kinds("foo != bar"),
        vec![
            TokenKind::Identifier,
            TokenKind::BangEqual,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("foo!=bar"),
        vec![
            TokenKind::Identifier,
            TokenKind::BangEqual,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn constants_lead_with_uppercase() {
    assert_eq!(
        kinds("Foo bar BAZ _qux"),
        vec![
            TokenKind::Constant,
            TokenKind::Identifier,
            TokenKind::Constant,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unary_operator_method_names() {
    assert_eq!(
        kinds("def +@; end"),
        vec![
            TokenKind::KeywordDef,
            TokenKind::PlusAt,
            TokenKind::Semicolon,
            TokenKind::KeywordEnd,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("x.-@"),
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::MinusAt,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("x.!@"),
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::BangAt,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("def ~@; end"),
        vec![
            TokenKind::KeywordDef,
            TokenKind::TildeAt,
            TokenKind::Semicolon,
            TokenKind::KeywordEnd,
            TokenKind::Eof,
        ]
    );
    // without a `def` or `.` before it, `!@x` is negation of an ivar
    assert_eq!(
        kinds("!@x"),
        vec![
            TokenKind::Bang,
            TokenKind::InstanceVariable,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn bracket_pair_after_dot() {
    assert_eq!(
        kinds("x.[]"),
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::BracketLeftRight,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("x[]"),
        vec![
            TokenKind::Identifier,
            TokenKind::BracketLeft,
            TokenKind::BracketRight,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn labels_and_double_colons() {
    assert_eq!(
        lexed("{a: 1}"),
        vec![
            (TokenKind::BraceLeft, "{".to_string()),
            (TokenKind::Label, "a:".to_string()),
            (TokenKind::Integer, "1".to_string()),
            (TokenKind::BraceRight, "}".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
    assert_eq!(
        kinds("foo::bar"),
        vec![
            TokenKind::Identifier,
            TokenKind::ColonColon,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    // keywords take the label form too
    assert_eq!(
        kinds("{if: 1}"),
        vec![
            TokenKind::BraceLeft,
            TokenKind::Label,
            TokenKind::Integer,
            TokenKind::BraceRight,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn character_literals_and_ternary_question() {
    assert_eq!(
        lexed("?a ?Z ?_"),
        vec![
            (TokenKind::CharacterLiteral, "?a".to_string()),
            (TokenKind::CharacterLiteral, "?Z".to_string()),
            (TokenKind::CharacterLiteral, "?_".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
    assert_eq!(
        kinds("x ? y : z"),
        vec![
            TokenKind::Identifier,
            TokenKind::QuestionMark,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn global_variables_and_references() {
    assert_eq!(
        lexed("$foo $~ $12 $& $` $' $+"),
        vec![
            (TokenKind::GlobalVariable, "$foo".to_string()),
            (TokenKind::GlobalVariable, "$~".to_string()),
            (TokenKind::NthReference, "$12".to_string()),
            (TokenKind::BackReference, "$&".to_string()),
            (TokenKind::BackReference, "$`".to_string()),
            (TokenKind::BackReference, "$'".to_string()),
            (TokenKind::BackReference, "$+".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
    assert_eq!(kinds("$ "), vec![TokenKind::Invalid, TokenKind::Eof]);
}

#[test]
fn instance_and_class_variables() {
    assert_eq!(
        lexed("@foo @@bar"),
        vec![
            (TokenKind::InstanceVariable, "@foo".to_string()),
            (TokenKind::ClassVariable, "@@bar".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
    assert_eq!(
        kinds("@1"),
        vec![TokenKind::Invalid, TokenKind::Integer, TokenKind::Eof]
    );
    assert_eq!(kinds("@ "), vec![TokenKind::Invalid, TokenKind::Eof]);
}

#[test]
fn comments_swallow_their_newline() {
    assert_eq!(
        lexed("# a comment\nx"),
        vec![
            (TokenKind::Comment, "# a comment\n".to_string()),
            (TokenKind::Identifier, "x".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
    assert_eq!(
        kinds("x # trailing"),
        vec![TokenKind::Identifier, TokenKind::Comment, TokenKind::Eof]
    );
}

#[test]
fn newlines_are_tokens_other_whitespace_is_not() {
    assert_eq!(
        kinds("a\nb"),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("a \t b"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn division_before_a_space_regexp_otherwise() {
    assert_eq!(
        kinds("a / b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("a /b/"),
        vec![
            TokenKind::Identifier,
            TokenKind::RegexpBegin,
            TokenKind::StringContent,
            TokenKind::RegexpEnd,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn stray_bytes_are_invalid_tokens() {
    assert_eq!(kinds("\\"), vec![TokenKind::Invalid, TokenKind::Eof]);

    // non-ASCII bytes are not identifier characters
    let mut lexer = Lexer::new(&[0xc3, 0xa9]);
    let stream: Vec<TokenKind> = lexer.tokenize().into_iter().map(|t| t.kind).collect();
    assert_eq!(
        stream,
        vec![TokenKind::Invalid, TokenKind::Invalid, TokenKind::Eof]
    );
}

#[test]
fn end_of_script_sentinels() {
    assert_eq!(kinds("a\u{0}b"), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("a\u{4}b"), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("a\u{1a}b"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn heredoc_openers_end_the_stream() {
    assert_eq!(
        kinds("x = <<~EOS\nhi"),
        vec![TokenKind::Identifier, TokenKind::Equal, TokenKind::Eof]
    );
    assert_eq!(
        kinds("x = <<-EOS\nhi"),
        vec![TokenKind::Identifier, TokenKind::Equal, TokenKind::Eof]
    );
    // plain << is a shift
    assert_eq!(
        kinds("a << b"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessLess,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_is_idempotent_after_eof() {
    let source = b"x <<~DOC";
    let mut lexer = Lexer::new(source);
    while lexer.next_token().kind != TokenKind::Eof {}

    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
    }
}

#[test]
fn previous_tracks_the_last_emitted_token() {
    let mut lexer = Lexer::new(b"a b");
    lexer.lex();
    assert_eq!(lexer.current().kind, TokenKind::Identifier);
    assert_eq!(lexer.previous().kind, TokenKind::Eof);

    lexer.lex();
    assert_eq!(lexer.current().kind, TokenKind::Identifier);
    assert_eq!(lexer.previous().kind, TokenKind::Identifier);
    assert_eq!(lexer.previous().span.start, 0);
    assert_eq!(lexer.current().span.start, 2);
}

#[test]
fn spans_are_bounded_and_monotonic() {
    let source = "def f(a)\n  \"s#{a}\" + %w[x y] + /r/ =~ $1\nend\n";
    let bytes = source.as_bytes();
    let mut lexer = Lexer::new(bytes);

    let mut previous_end = 0;
    for token in lexer.tokenize() {
        assert!(token.span.start <= token.span.end);
        assert!(token.span.end <= bytes.len());
        assert!(
            token.span.start >= previous_end,
            "token {token} overlaps its predecessor"
        );
        previous_end = token.span.end;
    }
}

#[test]
fn independent_lexers_produce_identical_streams() {
    let source = b"class Foo; def bar; \"x#{1}\" =~ /y/i; end; end";
    let first = Lexer::new(source).tokenize();
    let second = Lexer::new(source).tokenize();
    assert_eq!(first, second);
}
