use std::collections::HashSet;

use crate::ast::{
    expressions::Expr,
    statements::{ArrayStmt, ForStmt, IfStmt, PrintStmt, Program, Stmt, VarStmt},
};

/// Names already emitted in declare form during this generation pass.
type SymbolTable = HashSet<String>;

/// Generates a complete Go program for the AST.
///
/// The symbol table lives exactly as long as one pass, so regenerating
/// the same program with a fresh call yields byte-identical output and
/// concurrent compilations cannot observe each other.
pub fn generate(program: &Program) -> String {
    let mut declared = SymbolTable::new();
    let mut out = String::new();

    out.push_str("package main\n\n");
    out.push_str("import \"fmt\"\n\n");
    out.push_str("func main() {\n");

    for stmt in &program.statements {
        out.push_str(&gen_stmt(stmt, &mut declared, 1));
        out.push('\n');
    }

    out.push_str("}\n");
    out
}

fn gen_stmt(stmt: &Stmt, declared: &mut SymbolTable, level: usize) -> String {
    match stmt {
        Stmt::Var(var) => format!("{}{}", tabs(level), gen_var(var, declared)),
        Stmt::Array(array) => format!("{}{}", tabs(level), gen_array(array, declared)),
        Stmt::If(if_stmt) => gen_if(if_stmt, declared, level),
        Stmt::For(for_stmt) => gen_for(for_stmt, declared, level),
        Stmt::Print(print) => format!("{}{}", tabs(level), gen_print(print)),
    }
}

/// First binding of a name declares (`:=`), every later binding assigns
/// (`=`) - Go forbids re-declaring a name in the same scope. Visibility
/// is program-global: a name declared inside one branch stays declared
/// for the rest of the program.
fn gen_binding(name: &str, rhs: String, declared: &mut SymbolTable) -> String {
    if declared.contains(name) {
        format!("{} = {}", name, rhs)
    } else {
        declared.insert(name.to_string());
        format!("{} := {}", name, rhs)
    }
}

fn gen_var(var: &VarStmt, declared: &mut SymbolTable) -> String {
    gen_binding(&var.name, gen_expr(&var.value), declared)
}

fn gen_array(array: &ArrayStmt, declared: &mut SymbolTable) -> String {
    // interface{} elements so heterogeneous and absent values are
    // representable uniformly
    let mut literal = String::from("[]interface{}{");

    for (i, value) in array.values.iter().enumerate() {
        if i != 0 {
            literal.push_str(", ");
        }
        match value {
            Some(expr) => literal.push_str(&gen_expr(expr)),
            None => literal.push_str("nil"),
        }
    }
    literal.push('}');

    gen_binding(&array.name, literal, declared)
}

fn gen_if(if_stmt: &IfStmt, declared: &mut SymbolTable, level: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}if {} {{\n",
        tabs(level),
        gen_expr(&if_stmt.condition)
    ));
    for stmt in &if_stmt.consequence {
        out.push_str(&gen_stmt(stmt, declared, level + 1));
        out.push('\n');
    }

    if !if_stmt.alternative.is_empty() {
        out.push_str(&format!("{}}} else {{\n", tabs(level)));
        for stmt in &if_stmt.alternative {
            out.push_str(&gen_stmt(stmt, declared, level + 1));
            out.push('\n');
        }
    }

    out.push_str(&format!("{}}}", tabs(level)));
    out
}

fn gen_for(for_stmt: &ForStmt, declared: &mut SymbolTable, level: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}for ", tabs(level)));

    // Declaration tracking follows textual visit order: init, condition,
    // post, then the body. A loop variable declared by the init is
    // therefore already assigned-form inside the body.
    if let Some(init) = &for_stmt.init {
        out.push_str(&gen_var(init, declared));
    }
    out.push_str("; ");

    if let Some(condition) = &for_stmt.condition {
        out.push_str(&gen_expr(condition));
    }
    out.push_str("; ");

    if let Some(post) = &for_stmt.post {
        out.push_str(&gen_var(post, declared));
    }

    out.push_str(" {\n");
    for stmt in &for_stmt.body {
        out.push_str(&gen_stmt(stmt, declared, level + 1));
        out.push('\n');
    }
    out.push_str(&format!("{}}}", tabs(level)));

    out
}

fn gen_print(print: &PrintStmt) -> String {
    format!("fmt.Println({})", gen_expr(&print.value))
}

fn gen_expr(expr: &Expr) -> String {
    match expr {
        Expr::Identifier(identifier) => identifier.name.clone(),
        Expr::Number(number) => format_number(number.value),
        Expr::Binary(binary) => format!(
            "({} {} {})",
            gen_expr(&binary.left),
            binary.operator.value,
            gen_expr(&binary.right)
        ),
        Expr::Index(index) => format!(
            "{}[{}]",
            gen_expr(&index.collection),
            gen_expr(&index.index)
        ),
    }
}

/// Shortest decimal rendering, never scientific notation, so `1.0`
/// renders as `1` just like Go's `strconv.FormatFloat(v, 'f', -1, 64)`.
fn format_number(value: f64) -> String {
    format!("{}", value)
}

fn tabs(level: usize) -> String {
    "\t".repeat(level)
}
