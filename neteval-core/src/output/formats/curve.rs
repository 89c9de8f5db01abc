use std::io::Write;

use crate::{NetEvalError, algorithms::Curve};

/// Write a curve as `x<TAB>y` lines, one per universe rank, then a blank line
pub fn write_curve<W: Write>(writer: &mut W, curve: &Curve) -> Result<(), NetEvalError> {
    for point in curve.points() {
        writeln!(writer, "{}\t{}", point.x, point.y)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::CurvePoint;
    use std::io::Cursor;

    #[test]
    fn test_write_curve() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let curve: Curve = [(0.0, 0.5), (0.25, 1.0), (1.0, 1.0)]
            .into_iter()
            .map(|(x, y)| CurvePoint { x, y })
            .collect();

        write_curve(&mut cursor, &curve).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "0\t0.5\n0.25\t1\n1\t1\n\n");
    }

    #[test]
    fn test_write_empty_curve() {
        let mut buffer = Vec::new();
        write_curve(&mut buffer, &Curve::default()).unwrap();
        assert_eq!(buffer, b"\n");
    }
}
