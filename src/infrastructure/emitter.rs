//! C Source Emitter
//!
//! Lowers a validated call graph into compilable C translation units plus a
//! Makefile. Every function body is rendered in memory before the first
//! write, and any write failure removes whatever was already on disk, so the
//! output directory is always either complete or untouched.
//!
//! Emitted layout for `num_files = k`:
//! - `headers.h` - forward declarations for every function, shared by all
//!   units so cross-partition calls compile independently
//! - `main.c` - entry point; repeats the whole call tree `-l <loops>` times
//! - `0.c` .. `{k-1}.c` - the function partitions
//! - `Makefile` - default target builds one `benchmark` executable; per-unit
//!   object rules let `make -j` compile partitions in parallel

use crate::domain::callgraph::{CallGraph, FunctionNode};
use crate::domain::error::{CallbenchError, Result};
use crate::domain::partition::{partition_nodes, FilePartition};
use std::fs;
use std::path::{Path, PathBuf};

const HEADER_FILE: &str = "headers.h";
const MAIN_FILE: &str = "main.c";
const MAKEFILE: &str = "Makefile";
const BENCHMARK_NAME: &str = "benchmark";

/// What an emission run produced.
#[derive(Debug)]
pub struct EmitReport {
    /// Number of partition files (`0.c` ..), excluding `main.c`.
    pub translation_units: usize,
    /// Functions written across all partitions.
    pub functions: usize,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
}

/// Single-pass emitter: one graph in, one source tree out.
pub struct SourceEmitter<'a> {
    graph: &'a CallGraph,
    out_dir: PathBuf,
}

impl<'a> SourceEmitter<'a> {
    pub fn new(graph: &'a CallGraph, out_dir: &Path) -> Self {
        Self {
            graph,
            out_dir: out_dir.to_path_buf(),
        }
    }

    /// Emit all translation units and the build recipe.
    pub fn write_all(&self, num_files: usize) -> Result<EmitReport> {
        self.graph.validate()?;
        let partitions = partition_nodes(self.graph, num_files);

        // Render everything up front; rendering is infallible once the
        // graph has validated.
        let mut files: Vec<(PathBuf, String)> = Vec::with_capacity(partitions.len() + 3);
        files.push((self.out_dir.join(HEADER_FILE), self.render_header()));
        files.push((self.out_dir.join(MAIN_FILE), self.render_main()));
        for partition in &partitions {
            files.push((
                self.out_dir.join(format!("{}.c", partition.index)),
                self.render_partition(partition),
            ));
        }
        files.push((self.out_dir.join(MAKEFILE), render_makefile(&partitions)));

        fs::create_dir_all(&self.out_dir)
            .map_err(|e| CallbenchError::file_system(&self.out_dir, e))?;

        let mut written: Vec<PathBuf> = Vec::with_capacity(files.len());
        for (path, contents) in &files {
            if let Err(e) = fs::write(path, contents) {
                for partial in &written {
                    let _ = fs::remove_file(partial);
                }
                return Err(CallbenchError::file_system(path, e));
            }
            written.push(path.clone());
        }

        Ok(EmitReport {
            translation_units: partitions.len(),
            functions: self.graph.node_count(),
            files: written,
        })
    }

    fn render_header(&self) -> String {
        let mut out = String::new();
        for node in &self.graph.nodes {
            out.push_str(&format!("void {}(void);\n", function_name(node.id)));
        }
        out
    }

    fn render_main(&self) -> String {
        format!(
            "#include <unistd.h>\n\
             #include <stdio.h>\n\
             #include <stdlib.h>\n\
             #include \"{header}\"\n\
             \n\
             int main(int argc, char **argv) {{\n\
             unsigned long loops = 1;\n\
             int c;\n\
             while ((c = getopt(argc, argv, \"l:\")) != -1) {{\n\
             switch (c) {{\n\
             case 'l':\n\
             loops = strtoul(optarg, NULL, 0);\n\
             break;\n\
             default:\n\
             printf(\"Invalid argument provided. Valid arguments: -l\\n\");\n\
             exit(1);\n\
             }}\n\
             }}\n\
             for (unsigned long i = 0; i < loops; i++) {{\n\
             {root}();\n\
             }}\n\
             return 0;\n\
             }}\n",
            header = HEADER_FILE,
            root = function_name(self.graph.root),
        )
    }

    fn render_partition(&self, partition: &FilePartition) -> String {
        let mut out = format!("#include \"{}\"\n\n", HEADER_FILE);
        for &id in &partition.node_ids {
            // Ids come from partition_nodes, which only hands out ids that
            // exist in the validated graph.
            if let Some(node) = self.graph.node(id) {
                out.push_str(&render_function(node));
                out.push('\n');
            }
        }
        out
    }
}

fn function_name(id: u32) -> String {
    format!("function_{}", id)
}

/// Render one function definition: the body construct first, then one call
/// statement per callee in graph order.
fn render_function(node: &FunctionNode) -> String {
    let mut out = format!("void {}(void) {{\n", function_name(node.id));
    if node.has_intra_control_flow {
        out.push_str(&render_branch_body(node.id));
    } else {
        out.push_str(STRAIGHT_BODY);
    }
    for &callee in &node.callees {
        out.push_str(&format!("{}();\n", function_name(callee)));
    }
    out.push_str("}\n");
    out
}

/// Straight-line arithmetic filler.
const STRAIGHT_BODY: &str = "int x = 1;\n\
     int y = x*x + 3;\n\
     int z = y*x + 12345;\n\
     int w = z*z + x - y;\n";

/// A static flip-flop drives the taken/not-taken path on alternating
/// invocations, giving the branch predictor real work without touching the
/// function's call list.
fn render_branch_body(id: u32) -> String {
    format!(
        "static int flip_{id} = 0;\n\
         if (flip_{id}++ & 1) {{\n\
         int x = 1;\n\
         int y = x*x + 3;\n\
         int z = y*x + 12345;\n\
         int w = z*z + x - y;\n\
         }} else {{\n\
         int x = 2;\n\
         int y = x*x + 7;\n\
         int z = y*x + 54321;\n\
         int w = z*z - x + y;\n\
         }}\n",
        id = id
    )
}

/// Build recipe: one object rule per translation unit so a parallel `make`
/// compiles them concurrently, plus the final link and a `clean` target.
fn render_makefile(partitions: &[FilePartition]) -> String {
    let mut c_files: Vec<String> = partitions
        .iter()
        .map(|p| format!("{}.c", p.index))
        .collect();
    c_files.push(MAIN_FILE.to_string());

    let obj_files: Vec<String> = c_files
        .iter()
        .map(|c| c.replace(".c", ".o"))
        .collect();

    let mut out = String::from("CFLAGS = -O0\n\n");
    out.push_str(&format!(
        "{name}: {objs}\n\tgcc -o {name} {objs} $(CFLAGS)\n\n",
        name = BENCHMARK_NAME,
        objs = obj_files.join(" "),
    ));
    for (obj, c_file) in obj_files.iter().zip(&c_files) {
        out.push_str(&format!(
            "{obj}: {c_file} {header}\n\tgcc -c -o {obj} {c_file} $(CFLAGS)\n\n",
            obj = obj,
            c_file = c_file,
            header = HEADER_FILE,
        ));
    }
    out.push_str(&format!("clean:\n\trm -f *.o {}\n", BENCHMARK_NAME));
    out
}
