// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Locate the next `<o ...>...</c>` block, case-insensitive.
/// Returns byte offsets of the whole block within `s`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Does the opening tag of `block` carry `needle` in its class attribute?
/// Tolerates single quotes, double quotes, unquoted, multi-class.
pub fn tag_has_class_ci(block: &str, needle: &str) -> bool {
    let end = block.find('>').unwrap_or(block.len());
    let opener = to_lower(&block[..end]);
    opener.contains(&format!(r#"class="{}""#, needle))
        || opener.contains(&format!(r#"class='{}'"#, needle))
        || (opener.contains("class=") && opener.contains(needle))
}

/// Extract an attribute value from the opening tag of `block`.
/// Quotes optional in source.
pub fn attr_value_ci(block: &str, name: &str) -> Option<String> {
    let open_end = block.find('>').unwrap_or(block.len());
    let opener = &block[..open_end];
    let lc = to_lower(opener);
    let at = lc.find(&join!(&to_lower(name), "="))?;
    let val = &opener[at + name.len() + 1..];

    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start_off..].find(quote).map(|e| start_off + e).unwrap_or(val.len())
    } else {
        val.find(|c: char| c.is_ascii_whitespace()).unwrap_or(val.len())
    };
    let v = normalize_entities(val[start_off..end].trim());
    if v.is_empty() { None } else { Some(v) }
}

/// Find the whole block of the element carrying the given id. Scans
/// for the id text, requires it to sit inside an opening tag with an
/// `id=` attribute, then closes on the matching end tag by name.
/// No nesting awareness (fine for the flat markup we scrape).
pub fn block_by_id_ci<'a>(s: &'a str, id: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let idl = to_lower(id);
    let mut from = 0usize;
    loop {
        let at = lc.get(from..)?.find(&idl)? + from;
        from = at + idl.len();

        let Some(tag_start) = lc[..at].rfind('<') else { continue };
        let Some(open_rel) = lc[tag_start..].find('>') else { continue };
        let open_end = tag_start + open_rel;
        if at > open_end || !lc[tag_start..open_end].contains("id=") {
            continue;
        }

        let tag_name: String = lc[tag_start + 1..open_end]
            .chars()
            .take_while(|c| !c.is_ascii_whitespace())
            .collect();
        if tag_name.is_empty() {
            continue;
        }
        let (bs, be) = next_tag_block_ci(
            s,
            &join!("<", &tag_name),
            &join!("</", &tag_name, ">"),
            tag_start,
        )?;
        return Some(&s[bs..be]);
    }
}
