use std::io::Write;

use crate::{
    error::{Error, RuntimeError},
    interpreter::{executor::core::Context, lexer::Command, value::matrix::Matrix},
    io::{CONSOLE, label_file::read_labels},
    kernel::{correspondence, eigen},
};

/// Decimals of coordinate files.
const COORDINATE_PRECISION: usize = 14;
/// Decimals of contribution files.
const CONTRIBUTION_PRECISION: usize = 4;

/// Formats a matrix one row per line, appending `labels[i]` to row `i` when
/// present.
fn format_rows(matrix: &Matrix, precision: usize, labels: &[String]) -> String {
    let mut text = String::new();
    for (i, row) in matrix.rows_iter().enumerate() {
        for x in row {
            text.push_str(&format!("{x:.precision$}  "));
        }
        if let Some(label) = labels.get(i) {
            text.push_str(label);
        }
        text.push('\n');
    }
    text
}

impl<W: Write> Context<W> {
    /// `tridiag <var> <values file> <vectors file>`
    ///
    /// Writes the eigenvalues in descending order, one per line with their
    /// explained proportion and the cumulative proportion, and the
    /// eigenvectors as columns. The proportions are relative to the trace,
    /// or to the trace minus the largest eigenvalue when the trace is
    /// negative. The variable is left untouched.
    pub(crate) fn exec_tridiag(&mut self) -> Result<(), Error> {
        let id = self.variable_operand(Command::Tridiag)?;
        let values_path = self.path_operand(Command::Tridiag)?;
        let vectors_path = self.path_operand(Command::Tridiag)?;

        let matrix = self.variables.bound(id)?;
        let eigen = eigen::decompose(matrix, &self.limits)?;
        let trace = matrix.trace();
        let divisor = match eigen.values.first() {
            Some(largest) if trace < 0.0 => trace - largest,
            _ => trace,
        };

        let mut values = String::new();
        let mut cumulative = 0.0;
        for value in &eigen.values {
            cumulative += value;
            values.push_str(&format!("{value:.COORDINATE_PRECISION$}  {:.3}  {:.3}\n",
                                     value / divisor,
                                     cumulative / divisor));
        }
        let vectors = format_rows(&eigen.vectors, COORDINATE_PRECISION, &[]);
        log::info!("{} eigenvalues of {id} to {values_path}, eigenvectors to {vectors_path}",
                   eigen.values.len());

        self.emit(&values_path, &values)?;
        self.emit(&vectors_path, &vectors)
    }

    /// `compocor <N> <V> <L> <coords> <abs> <rel> [<column labels> <row labels>]`
    ///
    /// Prints the explained inertia per axis, then writes principal
    /// coordinates, absolute contributions and relative contributions. The
    /// optional label files are appended to the coordinate lines, column
    /// labels first.
    pub(crate) fn exec_compocor(&mut self) -> Result<(), Error> {
        let table_id = self.variable_operand(Command::CompoCor)?;
        let vectors_id = self.variable_operand(Command::CompoCor)?;
        let values_id = self.variable_operand(Command::CompoCor)?;
        let coordinates_path = self.path_operand(Command::CompoCor)?;
        let absolute_path = self.path_operand(Command::CompoCor)?;
        let relative_path = self.path_operand(Command::CompoCor)?;
        let column_labels_path = self.optional_path_operand(Command::CompoCor)?;
        let row_labels_path = match column_labels_path {
            Some(_) => Some(self.path_operand(Command::CompoCor)?),
            None => None,
        };

        let table = self.variables.bound(table_id)?;
        let values = self.variables.bound(values_id)?;
        let inertia = correspondence::explained_inertia(values)?;
        let analysis = correspondence::analyse(table, self.variables.bound(vectors_id)?, values)?;

        let mut labels = Vec::new();
        if let (Some(columns), Some(rows)) = (&column_labels_path, &row_labels_path) {
            labels.extend(read_labels(columns, table.cols())?);
            labels.extend(read_labels(rows, table.rows())?);
        }

        let mut report = String::from("Explained inertia\n");
        for axis in &inertia {
            report.push_str(&format!("axis {} : {:.3}  {:.3}\n", axis.axis, axis.proportion, axis.cumulative));
        }
        self.emit(CONSOLE, &report)?;

        log::info!("principal coordinates to {coordinates_path}");
        self.emit(&coordinates_path,
                  &format_rows(&analysis.coordinates, COORDINATE_PRECISION, &labels))?;
        log::info!("absolute contributions to {absolute_path}");
        self.emit(&absolute_path,
                  &format_rows(&analysis.absolute, CONTRIBUTION_PRECISION, &[]))?;
        log::info!("relative contributions to {relative_path}");
        self.emit(&relative_path,
                  &format_rows(&analysis.relative, CONTRIBUTION_PRECISION, &[]))
    }

    /// `composupp <S> <F> <L> <coords>`: coordinates of supplementary rows.
    pub(crate) fn exec_composupp(&mut self) -> Result<(), Error> {
        self.exec_supplementary(Command::CompoLSupp, correspondence::supplementary_rows)
    }

    /// `compocsupp <S> <F> <L> <coords>`: coordinates of supplementary
    /// columns.
    pub(crate) fn exec_compocsupp(&mut self) -> Result<(), Error> {
        self.exec_supplementary(Command::CompoCSupp, correspondence::supplementary_columns)
    }

    fn exec_supplementary(&mut self,
                          command: Command,
                          project: fn(&Matrix, &Matrix, &Matrix) -> Result<Matrix, RuntimeError>)
                          -> Result<(), Error> {
        let points_id = self.variable_operand(command)?;
        let coordinates_id = self.variable_operand(command)?;
        let values_id = self.variable_operand(command)?;
        let path = self.path_operand(command)?;

        let projected = project(self.variables.bound(points_id)?,
                                self.variables.bound(coordinates_id)?,
                                self.variables.bound(values_id)?)?;
        log::info!("{} supplementary coordinates to {path}", command.keyword());
        self.emit(&path, &format_rows(&projected, COORDINATE_PRECISION, &[]))
    }
}
