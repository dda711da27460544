//! Test fixtures - grammar sources and a scripted compiler.

/// A minimal JavaCC grammar
pub const SIMPLE_GRAMMAR: &str = r#"options { STATIC = false; }

PARSER_BEGIN(Simple)
package demo;
public class Simple {}
PARSER_END(Simple)

void Start() : {} { <EOF> }
"#;

/// A minimal JJTree grammar
pub const TREE_GRAMMAR: &str = r#"options { MULTI = true; }

PARSER_BEGIN(Tree)
package demo;
public class Tree {}
PARSER_END(Tree)

void Start() #Start : {} { <EOF> }
"#;

/// A hand-written helper that sits next to the grammars
pub const HELPER_SOURCE: &str = "package demo;\n\npublic class Helper {}\n";

/// Stand-in for `java -cp CP MAIN [OPTIONS] FILE`
///
/// Writes `<stem>.java` (`<stem>.jj` for JJTree) into the output directory
/// hint, or the HTML file named by `-OUTPUT_FILE=`. Every invocation is
/// appended to `$FAKE_JAVA_LOG`. The grammar named by `$FAKE_JAVA_FAIL`
/// exits with status 1.
pub const FAKE_JAVA: &str = r#"#!/bin/sh
[ "$1" = "-cp" ] || exit 90
shift 2
main="$1"
shift
out_dir=""
out_file=""
input=""
for arg in "$@"; do
  case "$arg" in
    -OUTPUT_DIRECTORY=*) out_dir="${arg#-OUTPUT_DIRECTORY=}" ;;
    -JJTREE_OUTPUT_DIRECTORY=*) out_dir="${arg#-JJTREE_OUTPUT_DIRECTORY=}" ;;
    -OUTPUT_FILE=*) out_file="${arg#-OUTPUT_FILE=}" ;;
    -*) ;;
    *) input="$arg" ;;
  esac
done
if [ -n "$FAKE_JAVA_LOG" ]; then
  echo "$main $*" >> "$FAKE_JAVA_LOG"
fi
name=$(basename "$input")
stem="${name%.*}"
if [ -n "$FAKE_JAVA_FAIL" ] && [ "$name" = "$FAKE_JAVA_FAIL" ]; then
  echo "Encountered errors in $name" >&2
  exit 1
fi
echo "Parser generated successfully."
if [ -n "$out_file" ]; then
  echo "<html><body>$stem</body></html>" > "$out_file"
elif [ "$main" = "org.javacc.jjtree.Main" ]; then
  echo "// tree grammar from $name" > "$out_dir/$stem.jj"
else
  echo "// generated from $name" > "$out_dir/$stem.java"
fi
"#;
