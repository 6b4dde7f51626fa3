use treefs::{ErrorCode, ErrorCodeExt, FsBackend, Node, TreeFS};

fn main() {
    // seed the store with a fixture tree; `TreeFS` adopts it as its root
    let seed: Node = serde_json::from_str(r#"{ "docs": { "first.txt": "Hello" } }"#).unwrap();
    let Node::Folder(root) = seed else {
        unreachable!("the fixture is a folder");
    };
    let mut fs = TreeFS::with_root(root);

    // creates `/build/out` and every missing parent
    fs.mkpath("/build/out").unwrap();

    // file `/second.txt` is created in the root
    fs.write_file("/second.txt", "World").unwrap();

    // copying a file into an existing folder keeps its basename: `/build/out/second.txt`
    fs.copy("second.txt", "build/out").unwrap();

    // `.` and `..` are collapsed before lookup
    let first = fs.read_file("build/../docs/./first.txt").unwrap();
    let second = fs.read_file("/build/out/second.txt").unwrap();
    println!("{}, {}!", first, second);

    for path in fs.list_files("/").unwrap() {
        println!("{} ({} bytes)", path, fs.stat(&path).unwrap().size());
    }

    // folders cannot be read as files
    let err = fs.read_file("docs").unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::IsADirectory));
    println!("{}", err);

    // removes everything but the root
    fs.empty("/").unwrap();
    assert!(fs.list_files("/").unwrap().is_empty());
}
