/*!
# IO

Reading and writing graphs.

The only supported format is JSON (see [`json`] for the record layout), which captures options,
all labels, the compound hierarchy and edge names, so a graph survives a round trip unchanged.

## Traits

[`GraphReader`] and [`GraphWriter`] are implemented by format handlers such as [`JsonFormat`];
both provide a low-level method working on any reader/writer and a convenience wrapper for files.

```
use lgraphs::{prelude::*, io::*};

let mut graph: Graph<String, u32> = Graph::new();
graph.set_edge_label("a", "b", Some(3));

let mut buffer = Vec::new();
JsonFormat::default().try_write_graph(&graph, &mut buffer).unwrap();

let restored: Graph<String, u32> = JsonFormat::default().try_read_graph(buffer.as_slice()).unwrap();
assert_eq!(restored.edge("a", "b"), Some(&3));
```
*/

pub mod json;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{error::*, prelude::*};

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input cannot be read or is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Reader and writer for the JSON record format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the output (default: `false`); ignored when reading
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<N, E, L> GraphReader<Graph<N, E, L>> for JsonFormat
where
    N: Clone + DeserializeOwned,
    E: Clone + DeserializeOwned,
    L: DeserializeOwned,
{
    fn try_read_graph<R>(&self, reader: R) -> Result<Graph<N, E, L>>
    where
        R: BufRead,
    {
        let record: json::GraphRecord<N, E, L> = serde_json::from_reader(reader)?;
        json::read(record)
    }
}

impl<N, E, L> GraphWriter<Graph<N, E, L>> for JsonFormat
where
    N: Clone + Serialize,
    E: Clone + Serialize,
    L: Clone + Serialize,
{
    fn try_write_graph<W>(&self, graph: &Graph<N, E, L>, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let record = json::write(graph);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &record)?;
        } else {
            serde_json::to_writer(&mut writer, &record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
