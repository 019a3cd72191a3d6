// Методы лексического анализатора

impl<'a> Lexer<'a> {
    /// Читает следующий значимый токен
    ///
    /// Пробелы, комментарии и маркеры условных комментариев пропускаются.
    /// Возвращает `false`, если EOF уже был выдан или ввод некорректен; в этом
    /// состоянии лексер больше не читает байты.
    pub fn advance(&mut self) -> bool {
        loop {
            if self.halted || self.token_type == Some(TokenType::Eof) {
                self.finish();
                return false;
            }

            match self.read_next_token() {
                Some(token_type) if token_type.is_trivia() => continue,
                Some(_) => return true,
                None => {
                    self.fail();
                    return false;
                }
            }
        }
    }

    /// Возвращает последний прочитанный токен
    pub fn current_token(&self) -> Option<Token<'a>> {
        let token_type = self.token_type?;
        Some(Token::new(
            token_type,
            self.sql,
            self.token_start,
            self.position - self.token_start,
            self.config.is_sql_mode_active(SqlMode::NoBackslashEscapes),
        ))
    }

    /// Читает все оставшиеся значимые токены (без EOF)
    ///
    /// На некорректном вводе возвращает прочитанный до него префикс; различить
    /// случаи можно через `reached_eof()`.
    pub fn drain_all(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while self.advance() {
            match self.current_token() {
                Some(token) if token.token_type != TokenType::Eof => tokens.push(token),
                _ => break,
            }
        }
        tokens
    }

    /// Читает все токены и возвращает ошибку, если ввод разобран не полностью
    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>> {
        let tokens = self.drain_all();
        if self.eof_reached {
            Ok(tokens)
        } else {
            Err(Error::invalid_input(self.sql, self.position))
        }
    }

    /// Читает следующий токен, включая пробелы и комментарии
    ///
    /// Последовательность всех токенов, выданных этим методом, без пропусков
    /// покрывает ввод до EOF или до первого некорректного байта.
    pub fn scan_token(&mut self) -> Option<Token<'a>> {
        if self.halted || self.token_type == Some(TokenType::Eof) {
            self.finish();
            return None;
        }

        match self.read_next_token() {
            Some(_) => self.current_token(),
            None => {
                self.fail();
                None
            }
        }
    }

    /// Единая точка разбора одного токена
    fn read_next_token(&mut self) -> Option<TokenType> {
        self.token_start = self.position;
        let token_type = self.scan();
        self.token_type = token_type;
        token_type
    }

    fn scan(&mut self) -> Option<TokenType> {
        let Some(byte) = self.peek(0) else {
            self.eof_reached = true;
            return Some(TokenType::Eof);
        };

        // После точки идет только идентификатор: `db.1e5`, `t.select`
        if self.follows_dot() && self.identifier_char_length(self.position) > 0 {
            self.read_identifier_run();
            return Some(TokenType::Identifier);
        }

        let next = self.peek(1);
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0C => Some(self.read_whitespace()),

            b'\'' | b'"' | b'`' => self.read_quoted_text(),

            b'0'..=b'9' => self.read_number(),
            b'.' if next.is_some_and(is_digit) && !self.follows_identifier() => {
                self.read_number()
            }
            b'.' => Some(self.single(TokenType::DotSymbol)),

            b'x' | b'X' if next == Some(b'\'') => {
                self.read_quoted_number(is_hex_digit, TokenType::HexNumber)
            }
            b'b' | b'B' if next == Some(b'\'') => {
                self.read_quoted_number(is_binary_digit, TokenType::BinNumber)
            }
            b'n' | b'N' if next == Some(b'\'') => self.read_nchar_text(),

            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' | 0x80..=0xFF => {
                self.read_identifier_or_keyword()
            }

            b'=' => Some(self.single(TokenType::EqualOperator)),
            b':' if next == Some(b'=') => Some(self.double(TokenType::AssignOperator)),
            b':' => Some(self.single(TokenType::ColonSymbol)),
            b'<' => Some(self.read_less_than()),
            b'>' => Some(self.read_greater_than()),
            b'!' if next == Some(b'=') => Some(self.double(TokenType::NotEqualOperator)),
            b'!' => Some(self.single(TokenType::LogicalNotOperator)),
            b'+' => Some(self.single(TokenType::PlusOperator)),
            b'-' => self.read_minus(),
            b'*' if self.in_mysql_comment && next == Some(b'/') => {
                self.in_mysql_comment = false;
                Some(self.double(TokenType::MysqlCommentEnd))
            }
            b'*' => Some(self.single(TokenType::MultOperator)),
            b'/' if next == Some(b'*') => self.read_block_comment(),
            b'/' => Some(self.single(TokenType::DivOperator)),
            b'%' => Some(self.single(TokenType::ModOperator)),
            b'~' => Some(self.single(TokenType::BitwiseNotOperator)),
            b'^' => Some(self.single(TokenType::BitwiseXorOperator)),
            b'&' if next == Some(b'&') => Some(self.double(TokenType::LogicalAndOperator)),
            b'&' => Some(self.single(TokenType::BitwiseAndOperator)),
            b'|' if next == Some(b'|') => {
                let token_type = if self.config.is_sql_mode_active(SqlMode::PipesAsConcat) {
                    TokenType::ConcatPipesSymbol
                } else {
                    TokenType::LogicalOrOperator
                };
                Some(self.double(token_type))
            }
            b'|' => Some(self.single(TokenType::BitwiseOrOperator)),
            b'#' => Some(self.read_line_comment()),
            b'@' => Some(self.read_at()),
            b'\\' if next == Some(b'N') => Some(self.double(TokenType::NullEscape)),

            b',' => Some(self.single(TokenType::CommaSymbol)),
            b';' => Some(self.single(TokenType::SemicolonSymbol)),
            b'(' => Some(self.single(TokenType::OpenParSymbol)),
            b')' => Some(self.single(TokenType::CloseParSymbol)),
            b'{' => Some(self.single(TokenType::OpenCurlySymbol)),
            b'}' => Some(self.single(TokenType::CloseCurlySymbol)),
            b'?' => Some(self.single(TokenType::ParamMarker)),

            _ => None,
        }
    }

    fn finish(&mut self) {
        self.halted = true;
        self.token_type = None;
    }

    fn fail(&mut self) {
        self.position = self.token_start;
        log::debug!(
            "Лексер остановлен на байте {}: некорректный ввод",
            self.token_start
        );
        self.finish();
    }

    // === Вспомогательные методы ===

    /// Байт на расстоянии `offset` от текущей позиции
    #[inline]
    fn peek(&self, offset: usize) -> Option<u8> {
        self.sql.get(self.position + offset).copied()
    }

    /// Токен начинается сразу после `.`
    fn follows_dot(&self) -> bool {
        self.token_start > 0 && self.sql[self.token_start - 1] == b'.'
    }

    /// Токен начинается сразу после символа идентификатора
    fn follows_identifier(&self) -> bool {
        self.token_start > 0 && {
            let prev = self.sql[self.token_start - 1];
            is_identifier_byte(prev) || prev == b'`' || prev >= 0x80
        }
    }

    /// Длина символа идентификатора в позиции `at` (0, если символа нет)
    fn identifier_char_length(&self, at: usize) -> usize {
        match self.sql.get(at) {
            Some(&b) if is_identifier_byte(b) => 1,
            Some(&b) if b >= 0x80 => utf8_identifier_length(&self.sql[at..]),
            _ => 0,
        }
    }

    fn single(&mut self, token_type: TokenType) -> TokenType {
        self.position += 1;
        token_type
    }

    fn double(&mut self, token_type: TokenType) -> TokenType {
        self.position += 2;
        token_type
    }

    fn triple(&mut self, token_type: TokenType) -> TokenType {
        self.position += 3;
        token_type
    }
}
