use crate::pager::QueryParams;

#[macro_export]
macro_rules! get_param_or_num {
    ($request:expr, $name:expr, $default:expr) => {{
        let option = $request.get_param($name);
        match option {
            Some(value) => value.parse::<i64>().unwrap_or($default),
            None => $default,
        }
    }};
}

fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .into_owned()
}

/// Decodes a raw query string into ordered parameters. Later duplicates
/// overwrite earlier values in place.
pub fn query_params(raw: &str) -> QueryParams {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode(key), decode(value)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::encode_params;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_pairs_in_order() {
        let params = query_params("q=red+fox&page=3&tag=a%26b&flag");

        assert_eq!(params.get("q").map(|v| v.to_string()), Some("red fox".into()));
        assert_eq!(params.get("flag").map(|v| v.to_string()), Some("".into()));
        assert_eq!(encode_params(&params), "&q=red+fox&tag=a%26b&flag=");
    }

    #[test]
    fn empty_query() {
        assert!(query_params("").is_empty());
        assert!(query_params("&&").is_empty());
    }
}
