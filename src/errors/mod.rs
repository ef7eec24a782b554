/// Context message for a failed request
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", redact_secrets(url))
}

/// Context message for a payload that could not be parsed
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Context message for a cache read or write
pub fn cache_context(operation: &str, key: &str) -> String {
    format!("Failed to {} cache for key: {}", operation, key)
}

/// Hide API keys and bot tokens before a URL ends up in a log line
pub fn redact_secrets(url: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };

    let base = match base.find("/bot") {
        Some(idx) => {
            let rest = &base[idx + 4..];
            let tail = rest.find('/').map(|i| &rest[i..]).unwrap_or("");
            format!("{}/bot***{}", &base[..idx], tail)
        }
        None => base.to_string(),
    };

    match query {
        Some(query) => {
            let params: Vec<String> = query
                .split('&')
                .map(|pair| match pair.split_once('=') {
                    Some((key, _)) if key.to_lowercase() == "apikey" => format!("{}=***", key),
                    _ => pair.to_string(),
                })
                .collect();
            format!("{}?{}", base, params.join("&"))
        }
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_api_key_query_param() {
        let url = "https://api.example.com/v4/odds/?apiKey=secret&regions=us";

        assert_eq!(redact_secrets(url), "https://api.example.com/v4/odds/?apiKey=***&regions=us");
    }

    #[test]
    fn test_redacts_bot_token_path() {
        let url = "https://api.telegram.org/bot123:abc/sendMessage";

        assert_eq!(redact_secrets(url), "https://api.telegram.org/bot***/sendMessage");
    }
}
