use std::str::FromStr;

/// Parse `"x,y,z"` into three values, as used for rotations and translations
/// on the command line
#[allow(clippy::many_single_char_names)]
pub fn parse_triplet<T: FromStr>(s: &str) -> Result<[T; 3], String>
where
    <T as FromStr>::Err: std::fmt::Display,
{
    let v = s.split(',').map(str::trim).collect::<Vec<_>>();
    if v.len() != 3 {
        return Err(format!("expected 3 comma-separated values, found {} in '{s}'", v.len()));
    }
    let parse = |x: &str| x.parse::<T>().map_err(|e| format!("'{x}': {e}"));
    let x = parse(v[0])?;
    let y = parse(v[1])?;
    let z = parse(v[2])?;
    Ok([x, y, z])
}
