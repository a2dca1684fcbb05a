use std::collections::HashMap;
use std::io::Read;

use shiftsched_core::{Model, Person, SetConstraint, SetConstraintKind};

use crate::error::ParseError;

/// Parses the people and set-constraints CSV pair into a validated `Model`.
///
/// `num_days` is the horizon; each people row must carry that many
/// availability fields before any trailing set-enrollment columns.
pub fn parse_model<R1: Read, R2: Read>(
    num_days: usize,
    people_csv: R1,
    sets_csv: R2,
) -> Result<Model, ParseError> {
    let (mut constraints, sid_order) = parse_sets(sets_csv)?;
    let sid_index: HashMap<String, usize> =
        sid_order.iter().enumerate().map(|(i, sid)| (sid.clone(), i)).collect();

    let people = parse_people(num_days, people_csv, &sid_index, &mut constraints)?;

    Model::new(num_days, people, constraints).map_err(ParseError::from)
}

fn reader_for<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(source)
}

/// Returns the parsed constraints in input order, alongside the sid of each
/// in the same order (so people-CSV enrollment columns can look constraints
/// up by position without needing the constraints vector borrowed mutably).
fn parse_sets<R: Read>(sets_csv: R) -> Result<(Vec<SetConstraint>, Vec<String>), ParseError> {
    let mut reader = reader_for(sets_csv);
    let mut constraints = Vec::new();
    let mut order = Vec::new();

    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.map_err(|source| ParseError::Csv { context: "sets CSV".into(), source })?;
        let fields: Vec<&str> = record.iter().collect();
        if fields.len() < 3 {
            return Err(ParseError::SetsRowTooShort { row: row_idx, actual: fields.len() });
        }

        let sid = fields[0].to_string();
        let set_type = parse_int(row_idx, "constraint type", fields[1])?;
        let lo = parse_int(row_idx, "lower bound", fields[2])? as u32;

        let kind = match set_type {
            1 => {
                let hi_field = fields.get(3).copied().unwrap_or("-1");
                let hi = parse_int(row_idx, "upper bound", hi_field)?;
                let hi = if hi < 0 { None } else { Some(hi as u32) };
                SetConstraintKind::Department { lo, hi }
            }
            2 => SetConstraintKind::Synergy { lo },
            other => return Err(ParseError::UnknownConstraintType { row: row_idx, code: other }),
        };

        order.push(sid.clone());
        constraints.push(SetConstraint::new(sid, Vec::new(), kind));
    }

    Ok((constraints, order))
}

fn parse_people<R: Read>(
    num_days: usize,
    people_csv: R,
    sid_index: &HashMap<String, usize>,
    constraints: &mut [SetConstraint],
) -> Result<Vec<Person>, ParseError> {
    let mut reader = reader_for(people_csv);
    let mut people = Vec::new();

    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.map_err(|source| ParseError::Csv { context: "people CSV".into(), source })?;
        let fields: Vec<&str> = record.iter().collect();
        if fields.len() < num_days + 1 {
            return Err(ParseError::PeopleRowTooShort {
                row: row_idx,
                expected: num_days + 1,
                actual: fields.len(),
                num_days,
            });
        }

        let uid = fields[0].to_string();
        let mut available = Vec::with_capacity(num_days);
        for entry in &fields[1..=num_days] {
            available.push(match *entry {
                "0" => false,
                "1" => true,
                other => {
                    return Err(ParseError::InvalidAvailability {
                        row: row_idx,
                        entry: other.to_string(),
                    })
                }
            });
        }

        for sid in &fields[num_days + 1..] {
            let idx = sid_index.get(*sid).copied().ok_or_else(|| ParseError::UnknownSetEnrollment {
                row: row_idx,
                sid: (*sid).to_string(),
            })?;
            constraints[idx].members.push(uid.clone());
        }

        people.push(Person::new(uid, available));
    }

    Ok(people)
}

fn parse_int(row: usize, field: &str, value: &str) -> Result<i64, ParseError> {
    value
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger { row, field: format!("{field}={value:?}") })
}
