use common::{host::ActorSnapshot, prelude::*};
use std::io::{self, Write};

/// Writes the state of every actor, once per tick, as CSV.
///
/// Each row is the time followed by `id,x,y,z,yaw,vx,vy,vz` for each actor,
/// so rows vary in length as actors come and go.
pub struct Recorder<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> Recorder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().flexible(true).from_writer(writer),
        }
    }

    pub fn write(&mut self, time: f32, actors: &[ActorSnapshot]) -> Result<(), csv::Error> {
        let mut record = Vec::with_capacity(1 + actors.len() * 8);
        record.push(time.to_string());
        for actor in actors {
            let loc = actor.transform.location;
            let vel = actor.velocity;
            record.push(actor.id.to_string());
            record.push(loc.x.to_string());
            record.push(loc.y.to_string());
            record.push(loc.z.to_string());
            record.push(actor.transform.rotation.yaw().to_degrees().to_string());
            record.push(vel.x.to_string());
            record.push(vel.y.to_string());
            record.push(vel.z.to_string());
        }
        self.writer.write_record(&record)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> Result<W, csv::Error> {
        self.writer
            .into_inner()
            .map_err(|err| csv::Error::from(err.into_error()))
    }
}
