use std::{fs, io::{self, BufRead}, path::Path};

use crate::{Point, ReadPolygonError};

/// Read a polygon in the textual vertex format.
///
/// The first non-blank line holds the vertex count `n`, followed by `n` non-blank lines of
/// two whitespace-separated integers `x y`, in counter-clockwise order. Line numbers in errors are 1-based.
pub fn read_polygon<R: BufRead>(reader: R) -> Result<Vec<Point>, ReadPolygonError> {
    let mut lines = reader.lines()
        .enumerate()
        .map(|(i, line)| line.map(|line| (i + 1, line)))
        .filter(|line| match line {
            Ok((_, line)) => !line.trim().is_empty(),
            Err(_) => true,
        });

    let expected = match lines.next() {
        Some(line) => {
            let (number, line) = line?;
            let mut tokens = line.split_ascii_whitespace();
            let count = tokens.next().ok_or(ReadPolygonError::MissingVertexCount)?;
            let count = count.parse::<usize>().map_err(|source| ReadPolygonError::InvalidVertexCount { line: number, source })?;
            if let Some(token) = tokens.next() {
                return Err(ReadPolygonError::UnexpectedToken { line: number, token: token.to_owned() });
            }
            count
        }
        None => return Err(ReadPolygonError::MissingVertexCount),
    };

    let mut points = Vec::with_capacity(expected);
    for line in lines {
        let (number, line) = line?;
        points.push(parse_vertex(number, &line)?);
    }

    if points.len() != expected {
        return Err(ReadPolygonError::VertexCountMismatch { expected, found: points.len() });
    }

    log::debug!("read polygon with {} vertices", points.len());
    Ok(points)
}

fn parse_vertex(number: usize, line: &str) -> Result<Point, ReadPolygonError> {
    let mut tokens = line.split_ascii_whitespace();
    let mut coordinate = || -> Result<i64, ReadPolygonError> {
        let token = tokens.next().ok_or(ReadPolygonError::MissingCoordinate { line: number })?;
        token.parse::<i64>().map_err(|source| ReadPolygonError::InvalidCoordinate { line: number, source })
    };
    let x = coordinate()?;
    let y = coordinate()?;
    if let Some(token) = tokens.next() {
        return Err(ReadPolygonError::UnexpectedToken { line: number, token: token.to_owned() });
    }
    Ok(Point::new(x, y))
}

/// Parse a polygon from a string in the format accepted by [read_polygon]
pub fn parse_polygon(s: &str) -> Result<Vec<Point>, ReadPolygonError> {
    read_polygon(s.as_bytes())
}

/// Load a polygon from a file in the format accepted by [read_polygon]
pub fn load_polygon<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, ReadPolygonError> {
    let f = fs::File::open(path)?;
    read_polygon(io::BufReader::new(f))
}
