// Методы чтения отдельных видов токенов для лексического анализатора

impl<'a> Lexer<'a> {
    fn read_whitespace(&mut self) -> TokenType {
        while self.peek(0).is_some_and(is_whitespace) {
            self.position += 1;
        }
        TokenType::Whitespace
    }

    /// Читает строку или идентификатор в кавычках
    ///
    /// Кавычка внутри литерала экранируется удвоением, а для `'` и `"` еще и
    /// обратной косой чертой (если не активен NO_BACKSLASH_ESCAPES).
    fn read_quoted_text(&mut self) -> Option<TokenType> {
        let quote = self.peek(0)?;
        let backslash_escapes =
            quote != b'`' && !self.config.is_sql_mode_active(SqlMode::NoBackslashEscapes);
        self.position += 1;

        loop {
            let byte = self.peek(0)?;
            if byte == b'\\' && backslash_escapes {
                // Экранированный байт пропускается вместе с `\`
                self.position += 2;
                continue;
            }
            if byte == quote {
                if self.peek(1) == Some(quote) {
                    self.position += 2;
                    continue;
                }
                self.position += 1;
                break;
            }
            self.position += 1;
        }

        Some(match quote {
            b'\'' => TokenType::SingleQuotedText,
            b'"' => TokenType::DoubleQuotedText,
            _ => TokenType::BackTickQuotedId,
        })
    }

    /// `N'...'`: строка в национальной кодировке
    fn read_nchar_text(&mut self) -> Option<TokenType> {
        self.position += 1;
        self.read_quoted_text().map(|_| TokenType::NcharText)
    }

    /// `x'...'` и `b'...'`
    fn read_quoted_number(
        &mut self,
        is_valid: fn(u8) -> bool,
        token_type: TokenType,
    ) -> Option<TokenType> {
        self.position += 2;
        while self.peek(0).is_some_and(is_valid) {
            self.position += 1;
        }
        if self.peek(0) != Some(b'\'') {
            return None;
        }
        self.position += 1;
        Some(token_type)
    }

    /// Читает числовой литерал
    ///
    /// Целое, шестнадцатеричное, двоичное или десятичное число, за которым
    /// сразу идет символ идентификатора, целиком становится идентификатором:
    /// `1234a`, `0x1g`, `12.3a`. Числа с экспонентой так не переклассифицируются.
    fn read_number(&mut self) -> Option<TokenType> {
        let start = self.position;

        let prefixed = match (self.peek(0), self.peek(1), self.peek(2)) {
            (Some(b'0'), Some(b'x'), Some(c)) if is_hex_digit(c) => {
                Some((is_hex_digit as fn(u8) -> bool, TokenType::HexNumber))
            }
            (Some(b'0'), Some(b'b'), Some(c)) if is_binary_digit(c) => {
                Some((is_binary_digit as fn(u8) -> bool, TokenType::BinNumber))
            }
            _ => None,
        };

        let token_type = if let Some((is_valid, token_type)) = prefixed {
            self.position += 2;
            while self.peek(0).is_some_and(is_valid) {
                self.position += 1;
            }
            token_type
        } else {
            self.skip_digits();
            let integer_end = self.position;
            let mut token_type = None;

            if self.peek(0) == Some(b'.') {
                self.position += 1;
                self.skip_digits();
                token_type = Some(TokenType::DecimalNumber);
            }

            if matches!(self.peek(0), Some(b'e' | b'E')) {
                let digit_at = match self.peek(1) {
                    Some(b'+' | b'-') => 2,
                    _ => 1,
                };
                if self.peek(digit_at).is_some_and(is_digit) {
                    self.position += digit_at;
                    self.skip_digits();
                    return Some(TokenType::FloatNumber);
                }
            }

            token_type.unwrap_or_else(|| Self::classify_integer(&self.sql[start..integer_end]))
        };

        if self.identifier_char_length(self.position) > 0 {
            self.read_identifier_run();
            return Some(TokenType::Identifier);
        }
        Some(token_type)
    }

    fn skip_digits(&mut self) {
        while self.peek(0).is_some_and(is_digit) {
            self.position += 1;
        }
    }

    /// Тип целого числа по его величине
    ///
    /// Сравниваются десятичные строки, а не значения: длина числа не
    /// ограничена.
    fn classify_integer(digits: &[u8]) -> TokenType {
        let first_significant = digits
            .iter()
            .position(|&b| b != b'0')
            .unwrap_or(digits.len());
        let digits = &digits[first_significant..];

        let fits = |bound: &[u8]| {
            digits.len() < bound.len() || (digits.len() == bound.len() && digits <= bound)
        };

        if fits(INT32_MAX_DIGITS) {
            TokenType::IntNumber
        } else if fits(INT64_MAX_DIGITS) {
            TokenType::LongNumber
        } else if digits.len() == INT64_MAX_DIGITS.len() || fits(UINT64_MAX_DIGITS) {
            TokenType::UlonglongNumber
        } else {
            TokenType::DecimalNumber
        }
    }

    /// Пропускает последовательность символов идентификатора, возвращает ее длину
    fn read_identifier_run(&mut self) -> usize {
        let start = self.position;
        loop {
            let length = self.identifier_char_length(self.position);
            if length == 0 {
                break;
            }
            self.position += length;
        }
        self.position - start
    }

    fn read_identifier_or_keyword(&mut self) -> Option<TokenType> {
        let start = self.position;
        // Байт >= 0x80, не образующий допустимый символ
        if self.read_identifier_run() == 0 {
            return None;
        }
        let text = &self.sql[start..self.position];

        if text.len() > 1 && text[0] == b'_' && self.is_underscore_charset(&text[1..]) {
            return Some(TokenType::UnderscoreCharset);
        }

        if !text.is_ascii() || text.len() > MAX_KEYWORD_LENGTH {
            return Some(TokenType::Identifier);
        }

        let mut buffer = [0u8; MAX_KEYWORD_LENGTH];
        let upper = &mut buffer[..text.len()];
        upper.copy_from_slice(text);
        upper.make_ascii_uppercase();
        let keyword = std::str::from_utf8(upper)
            .ok()
            .and_then(keywords::lookup_keyword);

        Some(match keyword {
            Some(token_type) => self.resolve_keyword(token_type),
            None => TokenType::Identifier,
        })
    }

    fn is_underscore_charset(&self, name: &[u8]) -> bool {
        let Ok(name) = std::str::from_utf8(name) else {
            return false;
        };
        let name = name.to_ascii_lowercase();
        match &self.underscore_charsets {
            Some(charsets) => charsets.contains(&name),
            None => keywords::is_default_underscore_charset(&name),
        }
    }

    /// Применяет ограничения версии и режимов к найденному ключевому слову
    fn resolve_keyword(&self, token_type: TokenType) -> TokenType {
        if !keywords::is_keyword_in_version(token_type, self.config.mysql_version) {
            return TokenType::Identifier;
        }
        if keywords::is_function(token_type) && !self.followed_by_open_par() {
            return TokenType::Identifier;
        }
        if token_type == TokenType::Not
            && self.config.is_sql_mode_active(SqlMode::HighNotPrecedence)
        {
            return TokenType::NotHighPrecedence;
        }
        keywords::canonical(token_type)
    }

    /// После имени функции идет `(`; пробелы допустимы только в IGNORE_SPACE
    fn followed_by_open_par(&self) -> bool {
        let mut at = self.position;
        if self.config.is_sql_mode_active(SqlMode::IgnoreSpace) {
            while self.sql.get(at).copied().is_some_and(is_whitespace) {
                at += 1;
            }
        }
        self.sql.get(at) == Some(&b'(')
    }

    fn read_less_than(&mut self) -> TokenType {
        match (self.peek(1), self.peek(2)) {
            (Some(b'='), Some(b'>')) => self.triple(TokenType::NullSafeEqualOperator),
            (Some(b'='), _) => self.double(TokenType::LessOrEqualOperator),
            (Some(b'>'), _) => self.double(TokenType::NotEqualOperator),
            (Some(b'<'), _) => self.double(TokenType::ShiftLeftOperator),
            _ => self.single(TokenType::LessThanOperator),
        }
    }

    fn read_greater_than(&mut self) -> TokenType {
        match self.peek(1) {
            Some(b'=') => self.double(TokenType::GreaterOrEqualOperator),
            Some(b'>') => self.double(TokenType::ShiftRightOperator),
            _ => self.single(TokenType::GreaterThanOperator),
        }
    }

    /// `-`, `--` комментарий, операторы JSON `->` и `->>`
    fn read_minus(&mut self) -> Option<TokenType> {
        let version = self.config.mysql_version;
        match (self.peek(1), self.peek(2)) {
            (Some(b'-'), None) => Some(self.read_line_comment()),
            (Some(b'-'), Some(c)) if is_whitespace(c) => Some(self.read_line_comment()),
            (Some(b'>'), Some(b'>')) => (version >= JSON_UNQUOTED_SEPARATOR_MIN_VERSION)
                .then(|| self.triple(TokenType::JsonUnquotedSeparatorSymbol)),
            (Some(b'>'), _) => (version >= JSON_SEPARATOR_MIN_VERSION)
                .then(|| self.double(TokenType::JsonSeparatorSymbol)),
            _ => Some(self.single(TokenType::MinusOperator)),
        }
    }

    /// Комментарий до конца строки (перевод строки не входит в токен)
    fn read_line_comment(&mut self) -> TokenType {
        while self.peek(0).is_some_and(|b| b != b'\n') {
            self.position += 1;
        }
        TokenType::SqlComment
    }

    /// `/* ... */` или условный комментарий `/*!NNNNN ... */`
    fn read_block_comment(&mut self) -> Option<TokenType> {
        let mut body_start = self.position + 2;

        if self.peek(2) == Some(b'!') {
            body_start += 1;
            let version = self.read_comment_version(body_start);
            let header_end = body_start + version.map_or(0, |_| MYSQL_COMMENT_VERSION_DIGITS);

            if version.map_or(true, |v| self.config.mysql_version >= v) {
                self.position = header_end;
                self.in_mysql_comment = true;
                return Some(TokenType::MysqlCommentStart);
            }
            log::trace!(
                "Условный комментарий для версии {:?} пропущен (целевая версия {})",
                version,
                self.config.mysql_version
            );
            body_start = header_end;
        }

        let close = self.sql[body_start..]
            .windows(2)
            .position(|pair| pair == b"*/")?;
        self.position = body_start + close + 2;
        Some(TokenType::SqlComment)
    }

    /// Версия из ровно пяти цифр после `/*!`
    fn read_comment_version(&self, at: usize) -> Option<u32> {
        let digits = self.sql.get(at..at + MYSQL_COMMENT_VERSION_DIGITS)?;
        if !digits.iter().all(|&b| is_digit(b)) {
            return None;
        }
        Some(
            digits
                .iter()
                .fold(0u32, |version, &b| version * 10 + u32::from(b - b'0')),
        )
    }

    /// `@`, `@@` или `@name`
    fn read_at(&mut self) -> TokenType {
        if self.peek(1) == Some(b'@') {
            return self.double(TokenType::AtAtSignSymbol);
        }
        self.position += 1;
        let suffix_start = self.position;
        while self.peek(0).is_some_and(is_at_suffix_byte) {
            self.position += 1;
        }
        if self.position > suffix_start {
            TokenType::AtTextSuffix
        } else {
            TokenType::AtSignSymbol
        }
    }
}
