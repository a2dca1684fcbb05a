use std::io::{self, Write};

use shiftsched_core::Schedule;

/// Writes a schedule as `uid,v_1,...,v_D` rows, one per person, in the
/// person order the schedule was materialized with.
pub fn write_schedule<W: Write>(schedule: &Schedule, writer: W) -> io::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    for (person_idx, uid) in schedule.people().iter().enumerate() {
        let mut row = vec![uid.clone()];
        for day in 0..schedule.horizon() {
            row.push(schedule.get(person_idx, day).to_string());
        }
        csv_writer
            .write_record(&row)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    }
    csv_writer.flush()
}
