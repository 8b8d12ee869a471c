/// Code-point offsets (strictly increasing) to byte offsets of `text`.
pub fn byte_offsets(text: &str, cp_offsets: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(cp_offsets.len());
    let mut wanted = cp_offsets.iter().copied().peekable();

    for (cp_index, (byte_index, _)) in text.char_indices().enumerate() {
        while wanted.next_if(|&w| w == cp_index).is_some() {
            out.push(byte_index);
        }
        if wanted.peek().is_none() {
            return out;
        }
    }
    out.extend(wanted.map(|_| text.len()));
    out
}
