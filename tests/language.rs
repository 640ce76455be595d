use std::{env, fs, path::PathBuf};

use calmat::{
    config::Limits,
    error::{Error, ErrorKind, RuntimeError, ScriptError},
    interpreter::executor::core::{Context, Outcome},
};

fn execute(src: &str, params: &[&str], limits: Limits) -> (Context<Vec<u8>>, Result<Outcome, ScriptError>) {
    let params = params.iter().map(ToString::to_string).collect();
    let mut context = Context::new(src, params, Vec::new()).with_limits(limits);
    let result = context.run();
    (context, result)
}

fn assert_success(src: &str) -> Context<Vec<u8>> {
    let (context, result) = execute(src, &[], Limits::default());
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    context
}

fn assert_failure(src: &str, kind: ErrorKind) -> ScriptError {
    assert_failure_with(src, Limits::default(), kind).1
}

fn assert_failure_with(src: &str, limits: Limits, kind: ErrorKind) -> (Context<Vec<u8>>, ScriptError) {
    let (context, result) = execute(src, &[], limits);
    match result {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "unexpected error: {e}");
            (context, e)
        },
    }
}

fn output(context: &Context<Vec<u8>>) -> String {
    String::from_utf8_lossy(context.output()).into_owned()
}

fn data(context: &Context<Vec<u8>>, name: char) -> Vec<f64> {
    context.variable(name)
           .unwrap_or_else(|| panic!("variable {name} is unbound"))
           .data()
           .to_vec()
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("calmat-language-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn matint_then_print_reports_identity() {
    let context = assert_success("X = MATINT(3,3)\nPRINT X\n");
    assert_eq!(data(&context, 'X'), vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    let text = output(&context);
    assert!(text.starts_with("matrix X[3, 3]\nrow 0\nelement(0, 0) : 1.000000\n"));
    assert!(text.contains("element(1, 1) : 1.000000"));
    assert!(text.contains("element(0, 2) : 0.000000"));
    assert!(text.contains("row 2\n"));
}

#[test]
fn elementwise_and_lattice_operators() {
    let context = assert_success("A = matint(2, 2)\nB = 3 A\nC = B - A\nD = A | B\nE = A & B\nF = B + A\n");
    assert_eq!(data(&context, 'C'), vec![2.0, 0.0, 0.0, 2.0]);
    assert_eq!(data(&context, 'D'), vec![3.0, 0.0, 0.0, 3.0]);
    assert_eq!(data(&context, 'E'), vec![1.0, 0.0, 0.0, 1.0]);
    assert_eq!(data(&context, 'F'), vec![4.0, 0.0, 0.0, 4.0]);
}

#[test]
fn scalar_prefix_scales_the_following_sum() {
    let context = assert_success("A = matint(1, 1)\nY = 2 A + A\nZ = (2 A) + A\n");
    assert_eq!(data(&context, 'Y'), vec![4.0]);
    assert_eq!(data(&context, 'Z'), vec![3.0]);
}

#[test]
fn products_bind_tighter_than_sums() {
    let context = assert_success("A = matint(2, 2)\nB = 3 A\nC = A + A * B\nD = (A + A) * B\n");
    assert_eq!(data(&context, 'C'), vec![4.0, 0.0, 0.0, 4.0]);
    assert_eq!(data(&context, 'D'), vec![6.0, 0.0, 0.0, 6.0]);
}

#[test]
fn sum_level_operators_fold_left_to_right() {
    let context = assert_success("A = matint(1, 1)\nB = 3 A\nC = B - A | B\nD = B & A + A\n");
    assert_eq!(data(&context, 'C'), vec![3.0]);
    assert_eq!(data(&context, 'D'), vec![2.0]);
}

#[test]
fn transpose_applies_to_the_operand_only() {
    let context = assert_success("R = matint(2, 3)\nT = `R\nP = `R * R\nQ = ``R\n");
    assert_eq!(context.variable('T').unwrap().dims(), (3, 2));
    assert_eq!(context.variable('P').unwrap().dims(), (3, 3));
    assert_eq!(context.variable('Q'), context.variable('R'));
}

#[test]
fn complement_is_involutive_on_boolean_matrices() {
    let context = assert_success("A = matint(2, 3)\nB = ~A\nC = ~~A\nD = A ^ `B\n");
    assert_eq!(data(&context, 'B'), vec![0.0, 1.0, 1.0, 1.0, 0.0, 1.0]);
    assert_eq!(context.variable('C'), context.variable('A'));
    assert_eq!(data(&context, 'D'), vec![0.0, 1.0, 1.0, 0.0]);
}

#[test]
fn functions_in_scripts() {
    let context = assert_success("A = 4 matint(2, 2)\nB = inv_sym(A)\nC = cprofil(A + matint(2, 2))\nD = cent_red A\n");
    assert_eq!(data(&context, 'B'), vec![0.25, 0.0, 0.0, 0.25]);
    assert_eq!(data(&context, 'C'), vec![1.0, 0.0, 0.0, 1.0]);
    assert_eq!(data(&context, 'D'), vec![1.0, -1.0, -1.0, 1.0]);
}

#[test]
fn variables_and_keywords_are_case_insensitive() {
    let context = assert_success("a = MatInt(1, 1)\nB = A + a\nPrint b\n");
    assert_eq!(data(&context, 'B'), vec![2.0]);
    assert!(output(&context).contains("matrix B[1, 1]"));
}

#[test]
fn while_loop_counts_up_to_the_bound() {
    let src = "O = matint(1, 1)\nN = 3 O\nI = matzero(1, 1)\nK = matzero(1, 1)\nwhile I < N\n  I = I + O\n  K = K + O\nendwhile\n";
    let context = assert_success(src);
    assert_eq!(data(&context, 'I'), vec![3.0]);
    assert_eq!(data(&context, 'K'), vec![3.0]);
}

#[test]
fn while_with_false_condition_never_runs_its_body() {
    let src = "A = matint(1, 1)\nB = matzero(1, 1)\nC = matzero(1, 1)\nWHILE A = B\nC = A\nENDWHILE\nD = A\n";
    let context = assert_success(src);
    assert_eq!(data(&context, 'C'), vec![0.0]);
    assert_eq!(data(&context, 'D'), vec![1.0]);
}

#[test]
fn while_stops_as_soon_as_the_condition_fails() {
    let src = "O = matint(1, 1)\nA = matzero(1, 1)\nB = 2 O\nK = matzero(1, 1)\nwhile A < B\nA = A + O\nK = K + O\nendwhile\n";
    let context = assert_success(src);
    assert_eq!(data(&context, 'A'), vec![2.0]);
    assert_eq!(data(&context, 'K'), vec![2.0]);
}

#[test]
fn nested_while_loops() {
    let src = "\
O = matint(1, 1)
I = matzero(1, 1)
K = matzero(1, 1)
while I < 2 O
  I = I + O
  J = matzero(1, 1)
  while J < 3 O
    J = J + O
    K = K + O
  endwhile
endwhile
";
    let context = assert_success(src);
    assert_eq!(data(&context, 'K'), vec![6.0]);
}

#[test]
fn false_if_skips_nested_blocks() {
    let src = "\
A = matint(1, 1)
B = matzero(1, 1)
if A < B
  if A > B
    B = A
  endif
  rem unquoted endif in a comment
  C = A
endif
D = A
";
    let context = assert_success(src);
    assert!(context.variable('C').is_none());
    assert_eq!(data(&context, 'B'), vec![0.0]);
    assert_eq!(data(&context, 'D'), vec![1.0]);
}

#[test]
fn true_if_runs_its_body() {
    let context = assert_success("A = matint(1, 1)\nB = matzero(1, 1)\nif A > B\nC = A\nendif\n");
    assert_eq!(data(&context, 'C'), vec![1.0]);
}

#[test]
fn incomparable_matrices_are_neither_less_nor_greater() {
    let src = "\
A = matint(2, 2)
B = ~A
C = matzero(1, 1)
if A < B
C = matint(1, 1)
endif
if A > B
C = matint(1, 1)
endif
";
    let context = assert_success(src);
    assert_eq!(data(&context, 'C'), vec![0.0]);
}

#[test]
fn goto_loops_backwards_and_labels_ignore_case() {
    let src = "\
O = matint(1, 1)
I = matzero(1, 1)
N = 3 O
:Again
I = I + O
if I < N
goto AGAIN
endif
";
    let context = assert_success(src);
    assert_eq!(data(&context, 'I'), vec![3.0]);
}

#[test]
fn goto_unknown_label_aborts_before_the_next_statement() {
    let error = assert_failure("goto nowhere\nX = matint(1, 1)\n", ErrorKind::ControlFlow);
    assert_eq!(error.line, 1);

    let (context, _) = assert_failure_with("goto nowhere\nX = matint(1, 1)\n", Limits::default(), ErrorKind::ControlFlow);
    assert!(context.variable('X').is_none());
}

#[test]
fn end_stops_the_run() {
    let (context, result) = execute("A = matint(1, 1)\nend\nB = A\n", &[], Limits::default());
    assert_eq!(result.unwrap(), Outcome::Ended { line: 2 });
    assert!(context.variable('B').is_none());
}

#[test]
fn remarks_echo_their_quoted_text() {
    let context = assert_success("rem \"hello matrices\" trailing words\nREM no quotes here %x\nA = matint(1, 1)\n");
    assert_eq!(output(&context), "hello matrices\n");
}

#[test]
fn double_quote_ends_a_word() {
    let context = assert_success("rem\"hi\"\nA = matint(1, 1)\nREM\"there\" again\n");
    assert_eq!(output(&context), "hi\nthere\n");
    assert_eq!(data(&context, 'A'), vec![1.0]);
}

#[test]
fn parameters_are_substituted() {
    let (context, result) = execute("A = matint(1, 1)\nB = %1 A\n", &["script.cmt", "2.5"], Limits::default());
    result.unwrap();
    assert_eq!(data(&context, 'B'), vec![2.5]);

    let (_, result) = execute("A = matint(1, 1)\nB = %5 A\n", &["script.cmt"], Limits::default());
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Syntax);

    let (_, result) = execute("A = matint(1, 1)\nB = %x\n", &["script.cmt"], Limits::default());
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn load_reads_rows_and_ignores_trailing_fields() {
    let path = temp_file("grid.txt", "1 2 3 first\n\n4 5 6 second\n7 8 9\n");
    let context = assert_success(&format!("load \"{}\" X 2 3\n", path.display()));
    assert_eq!(data(&context, 'X'), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn load_from_a_short_file_binds_nothing() {
    let path = temp_file("short.txt", "1 2 3\n");
    let (context, error) = assert_failure_with(&format!("load \"{}\" X 2 3\n", path.display()),
                                               Limits::default(),
                                               ErrorKind::Io);
    assert!(context.variable('X').is_none());
    assert_eq!(error.line, 1);
}

#[test]
fn load_rejects_malformed_data_and_missing_files() {
    let path = temp_file("malformed.txt", "1 2 x\n4 5 6\n");
    assert_failure(&format!("load \"{}\" X 2 3\n", path.display()), ErrorKind::Io);
    assert_failure("load \"/definitely/not/here.txt\" X 2 3\n", ErrorKind::Io);
    assert_failure("load data.txt X 0 3\n", ErrorKind::Syntax);
    assert_failure("load data.txt X 400 400\n", ErrorKind::Resource);
}

#[test]
fn save_then_load_round_trips() {
    let path = temp_file("saved.txt", "");
    let src = format!("A = 3 matint(2, 3)\nsave A \"{0}\"\nload \"{0}\" B 2 3\n", path.display());
    let context = assert_success(&src);
    assert_eq!(context.variable('A'), context.variable('B'));
    assert_eq!(fs::read_to_string(&path).unwrap(),
               "3.000000  0.000000  0.000000  \n0.000000  3.000000  0.000000  \n");
}

#[test]
fn save_to_console_writes_to_the_output() {
    let context = assert_success("A = matint(1, 2)\nsave A con:\n");
    assert_eq!(output(&context), "1.000000  0.000000  \n");
}

#[test]
fn tridiag_writes_values_with_explained_proportions() {
    let context = assert_success("A = 2 matint(2, 2)\nB = matint(2, 2) + A\ntridiag B con: con:\n");
    let text = output(&context);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "3.00000000000000  0.500  0.500");
    assert_eq!(lines[1], "3.00000000000000  0.500  1.000");
    assert_eq!(lines.len(), 4);
    assert_eq!(data(&context, 'B'), vec![3.0, 0.0, 0.0, 3.0]);
}

#[test]
fn unbound_variable_is_reported_with_its_line() {
    let error = assert_failure("A = matint(1, 1)\nB = C\n", ErrorKind::UnboundVariable);
    assert_eq!(error.line, 2);
    assert_eq!(error.excerpt, "B = C");
    let text = error.to_string();
    assert!(text.starts_with("Error on line 2: "));
    assert!(text.ends_with("-------->>> 2 : B = C"));
}

#[test]
fn dimension_errors() {
    assert_failure("A = matint(2, 2)\nB = matint(3, 3)\nC = A + B\n", ErrorKind::Dimension);
    assert_failure("A = matint(2, 3)\nC = A * A\n", ErrorKind::Dimension);
    assert_failure("A = matint(2, 3)\nC = inv_sym(A)\n", ErrorKind::Dimension);
    assert_failure("A = matint(2, 2)\nB = matint(1, 1)\nif A = B\nendif\n", ErrorKind::Dimension);
}

#[test]
fn syntax_errors() {
    assert_failure("A = (matint(1, 1)\n", ErrorKind::Syntax);
    assert_failure("A = matint(1, 1) matint(1, 1)\n", ErrorKind::Syntax);
    assert_failure("AB = matint(1, 1)\n", ErrorKind::Syntax);
    assert_failure("A = \n", ErrorKind::Syntax);
    assert_failure("A matint(1, 1)\n", ErrorKind::Syntax);
    assert_failure("A = matint(1, 1\n", ErrorKind::Syntax);
    assert_failure("A = matint(1.5, 1)\n", ErrorKind::Syntax);
    assert_failure("A = matint(1, 1)\nif A + A\nendif\n", ErrorKind::Syntax);
    assert_failure("A = matint(1, 1)\nB = 1x A\n", ErrorKind::Syntax);
    assert_failure("= A\n", ErrorKind::Syntax);
}

#[test]
fn element_budget_is_enforced() {
    assert_failure("A = matint(300, 300)\n", ErrorKind::Resource);
    let limits = Limits::default().with_max_elements(10);
    assert_failure_with("A = matzero(4, 4)\n", limits, ErrorKind::Resource);
}

#[test]
fn control_flow_errors() {
    assert_failure("A = matint(1, 1)\nif A > A\nB = A\n", ErrorKind::ControlFlow);
    assert_failure("A = matint(1, 1)\nwhile A < A\nB = A\n", ErrorKind::ControlFlow);
    assert_failure("endwhile\n", ErrorKind::ControlFlow);

    let nested = "O = matint(1, 1)\nZ = matzero(1, 1)\nwhile Z < O\nwhile Z < O\nendwhile\nendwhile\n";
    assert_failure_with(nested, Limits::default().with_max_loop_depth(1), ErrorKind::ControlFlow);

    let labels = ":one\n:two\n";
    assert_failure_with(labels, Limits::default().with_max_labels(1), ErrorKind::ControlFlow);
    let jump_out = "O = matint(1, 1)\nZ = matzero(1, 1)\n:top\nwhile Z < O\ngoto top\nendwhile\n";
    let (_, error) = assert_failure_with(jump_out, Limits::default().with_max_loop_depth(4), ErrorKind::ControlFlow);
    assert!(matches!(error.error, Error::Runtime(RuntimeError::LoopStackOverflow { max: 4 })));
    assert_eq!(error.line, 4);
}

#[test]
fn eigen_iteration_cap_is_fatal() {
    let src = "A = matint(2, 2)\nB = ~A + A\ntridiag B con: con:\n";
    let limits = Limits::default().with_max_eigen_iterations(0);
    assert_failure_with(src, limits, ErrorKind::Convergence);
}

#[test]
fn inverse_of_an_indefinite_matrix_is_fatal() {
    assert_failure("A = matint(2, 2)\nB = ~A\nC = inv_sym(B)\n", ErrorKind::Convergence);
}
