//! Golden tables for source ref resolution.
//!
//! Every entry resolves a literal ref value and compares the full structured
//! result, success or error, by value.

use modref::{IdentityError, ModuleIdentity};

use super::*;
use crate::refs::GitTarget;

fn parse(value: &str) -> Result<ParsedRef, ParseError> {
    RefParser::new().parse(value, Format::ALL)
}

#[track_caller]
fn assert_ref(value: &str, expected: ParsedRef) {
    assert_eq!(parse(value), Ok(expected), "parsing {value:?}");
}

#[track_caller]
fn assert_err(value: &str, expected: ParseError) {
    assert_eq!(parse(value), Err(expected), "parsing {value:?}");
}

fn dir(path: &str) -> ParsedRef {
    ParsedRef::Dir(DirRef {
        path: path.to_owned(),
    })
}

fn archive(
    format: Format,
    path: &str,
    file_scheme: FileScheme,
    archive_type: ArchiveType,
    compression: CompressionType,
    strip_components: u32,
    subdir: &str,
) -> ParsedRef {
    ParsedRef::Archive(ArchiveRef {
        format,
        path: path.to_owned(),
        file_scheme,
        archive_type,
        compression,
        strip_components,
        subdir: subdir.to_owned(),
    })
}

fn git(
    path: &str,
    git_scheme: GitScheme,
    target: GitTarget,
    recurse_submodules: bool,
    depth: u32,
    subdir: &str,
) -> ParsedRef {
    ParsedRef::Git(GitRef {
        path: path.to_owned(),
        git_scheme,
        target,
        recurse_submodules,
        depth,
        subdir: subdir.to_owned(),
    })
}

fn single(
    format: Format,
    path: &str,
    file_scheme: FileScheme,
    compression: CompressionType,
) -> ParsedRef {
    ParsedRef::Single(SingleFileRef {
        format,
        path: path.to_owned(),
        file_scheme,
        compression,
    })
}

fn branch(name: &str) -> GitTarget {
    GitTarget::Branch(name.to_owned())
}

fn tag(name: &str) -> GitTarget {
    GitTarget::Tag(name.to_owned())
}

fn reference(name: &str) -> GitTarget {
    GitTarget::Ref(name.to_owned())
}

fn ref_with_branch(r: &str, b: &str) -> GitTarget {
    GitTarget::RefWithBranch {
        reference: r.to_owned(),
        branch: b.to_owned(),
    }
}

#[test]
fn dir_refs() {
    assert_ref("path/to/some/dir", dir("path/to/some/dir"));
    assert_ref(".", dir("."));
    assert_ref("/", dir("/"));
    assert_ref("foo/..", dir("."));
    assert_ref("../foo", dir("../foo"));
    assert_ref("/foo/bar/..", dir("/foo"));
    assert_ref("path//to/./dir/", dir("path/to/dir"));
}

#[test]
fn tar_refs() {
    use CompressionType::{Gzip, None, Zstd};
    use Format::Tar;

    let (local, tar) = (FileScheme::Local, ArchiveType::Tar);

    assert_ref(
        "path/to/file.tar",
        archive(Tar, "path/to/file.tar", local, tar, None, 0, ""),
    );
    assert_ref(
        "file:///path/to/file.tar",
        archive(Tar, "/path/to/file.tar", local, tar, None, 0, ""),
    );
    assert_ref(
        "path/to/file.tar#strip_components=1",
        archive(Tar, "path/to/file.tar", local, tar, None, 1, ""),
    );
    assert_ref(
        "path/to/file.tar.gz",
        archive(Tar, "path/to/file.tar.gz", local, tar, Gzip, 0, ""),
    );
    assert_ref(
        "path/to/file.tar.gz#strip_components=1",
        archive(Tar, "path/to/file.tar.gz", local, tar, Gzip, 1, ""),
    );
    assert_ref(
        "path/to/file.tgz",
        archive(Tar, "path/to/file.tgz", local, tar, Gzip, 0, ""),
    );
    assert_ref(
        "path/to/file.tgz#strip_components=1",
        archive(Tar, "path/to/file.tgz", local, tar, Gzip, 1, ""),
    );
    assert_ref(
        "path/to/file.tar.zst",
        archive(Tar, "path/to/file.tar.zst", local, tar, Zstd, 0, ""),
    );
    assert_ref(
        "path/to/file.tar.zst#strip_components=1",
        archive(Tar, "path/to/file.tar.zst", local, tar, Zstd, 1, ""),
    );
    assert_ref(
        "path/to/file.tar.zst#subdir=foo/bar",
        archive(Tar, "path/to/file.tar.zst", local, tar, Zstd, 0, "foo/bar"),
    );
    assert_ref(
        "http://path/to/file.tar",
        archive(Tar, "path/to/file.tar", FileScheme::Http, tar, None, 0, ""),
    );
    assert_ref(
        "https://path/to/file.tar",
        archive(Tar, "path/to/file.tar", FileScheme::Https, tar, None, 0, ""),
    );
}

#[test]
fn zip_refs() {
    use Format::Zip;

    let (local, zip, none) = (FileScheme::Local, ArchiveType::Zip, CompressionType::None);

    assert_ref(
        "path/to/file.zip",
        archive(Zip, "path/to/file.zip", local, zip, none, 0, ""),
    );
    assert_ref(
        "file:///path/to/file.zip",
        archive(Zip, "/path/to/file.zip", local, zip, none, 0, ""),
    );
    assert_ref(
        "path/to/file.zip#strip_components=1",
        archive(Zip, "path/to/file.zip", local, zip, none, 1, ""),
    );
}

#[test]
fn archive_format_overrides() {
    use CompressionType::{Gzip, None, Zstd};

    let (local, tar) = (FileScheme::Local, ArchiveType::Tar);

    assert_ref(
        "path/to/file#format=targz,strip_components=1",
        archive(Format::Targz, "path/to/file", local, tar, Gzip, 1, ""),
    );
    assert_ref(
        "path/to/file#format=tar,strip_components=1",
        archive(Format::Tar, "path/to/file", local, tar, None, 1, ""),
    );
    assert_ref(
        "path/to/file#format=tar,strip_components=1,compression=none",
        archive(Format::Tar, "path/to/file", local, tar, None, 1, ""),
    );
    assert_ref(
        "path/to/file#format=tar,strip_components=1,compression=gzip",
        archive(Format::Tar, "path/to/file", local, tar, Gzip, 1, ""),
    );
    assert_ref(
        "path/to/file#format=tar,strip_components=1,compression=zstd,subdir=foo/bar",
        archive(Format::Tar, "path/to/file", local, tar, Zstd, 1, "foo/bar"),
    );
    assert_ref(
        "path/to/file#format=zip,strip_components=1",
        archive(
            Format::Zip,
            "path/to/file",
            local,
            ArchiveType::Zip,
            None,
            1,
            "",
        ),
    );
}

#[test]
fn git_refs() {
    use GitScheme::Local;

    assert_ref(
        "path/to/dir.git",
        git("path/to/dir.git", Local, GitTarget::None, false, 1, ""),
    );
    assert_ref(
        "path/to/dir.git#depth=40",
        git("path/to/dir.git", Local, GitTarget::None, false, 40, ""),
    );
    assert_ref(
        "path/to/dir.git#branch=main",
        git("path/to/dir.git", Local, branch("main"), false, 1, ""),
    );
    assert_ref(
        "file:///path/to/dir.git#branch=main",
        git("/path/to/dir.git", Local, branch("main"), false, 1, ""),
    );
    assert_ref(
        "path/to/dir.git#tag=v1.0.0",
        git("path/to/dir.git", Local, tag("v1.0.0"), false, 1, ""),
    );
    assert_ref(
        "path/to/dir.git#subdir=foo/bar",
        git("path/to/dir.git", Local, GitTarget::None, false, 1, "foo/bar"),
    );
    assert_ref(
        "path/to/dir.git#subdir=.",
        git("path/to/dir.git", Local, GitTarget::None, false, 1, ""),
    );
    assert_ref(
        "path/to/dir.git#subdir=foo/..",
        git("path/to/dir.git", Local, GitTarget::None, false, 1, ""),
    );
}

#[test]
fn git_remote_refs() {
    assert_ref(
        "http://hello.com/path/to/dir.git#branch=main",
        git(
            "hello.com/path/to/dir.git",
            GitScheme::Http,
            branch("main"),
            false,
            1,
            "",
        ),
    );
    assert_ref(
        "https://hello.com/path/to/dir.git#branch=main",
        git(
            "hello.com/path/to/dir.git",
            GitScheme::Https,
            branch("main"),
            false,
            1,
            "",
        ),
    );
    assert_ref(
        "ssh://user@hello.com:path/to/dir.git#branch=main",
        git(
            "user@hello.com:path/to/dir.git",
            GitScheme::Ssh,
            branch("main"),
            false,
            1,
            "",
        ),
    );
    assert_ref(
        "git://user@hello.com:path/to/dir.git#branch=main",
        git(
            "user@hello.com:path/to/dir.git",
            GitScheme::Git,
            branch("main"),
            false,
            1,
            "",
        ),
    );
    assert_ref(
        "git://path/to/dir.git#branch=main",
        git("path/to/dir.git", GitScheme::Git, branch("main"), false, 1, ""),
    );
}

#[test]
fn git_ref_targets_default_to_deep_fetches() {
    let ssh = GitScheme::Ssh;
    let path = "user@hello.com:path/to/dir.git";

    assert_ref(
        "ssh://user@hello.com:path/to/dir.git#ref=refs/remotes/origin/HEAD",
        git(path, ssh, reference("refs/remotes/origin/HEAD"), false, 50, ""),
    );
    assert_ref(
        "ssh://user@hello.com:path/to/dir.git#ref=refs/remotes/origin/HEAD,branch=main",
        git(
            path,
            ssh,
            ref_with_branch("refs/remotes/origin/HEAD", "main"),
            false,
            50,
            "",
        ),
    );
    assert_ref(
        "ssh://user@hello.com:path/to/dir.git#ref=refs/remotes/origin/HEAD,depth=10",
        git(path, ssh, reference("refs/remotes/origin/HEAD"), false, 10, ""),
    );
    assert_ref(
        "ssh://user@hello.com:path/to/dir.git#ref=refs/remotes/origin/HEAD,branch=main,depth=10",
        git(
            path,
            ssh,
            ref_with_branch("refs/remotes/origin/HEAD", "main"),
            false,
            10,
            "",
        ),
    );
}

#[test]
fn git_format_overrides() {
    use GitScheme::Local;

    assert_ref(
        "/path/to/dir#branch=main,format=git",
        git("/path/to/dir", Local, branch("main"), false, 1, ""),
    );
    assert_ref(
        "/path/to/dir#format=git,branch=main/foo",
        git("/path/to/dir", Local, branch("main/foo"), false, 1, ""),
    );
    assert_ref(
        "path/to/dir#tag=main/foo,format=git",
        git("path/to/dir", Local, tag("main/foo"), false, 1, ""),
    );
    assert_ref(
        "path/to/dir#format=git,tag=main/foo",
        git("path/to/dir", Local, tag("main/foo"), false, 1, ""),
    );
    assert_ref(
        "path/to/dir#format=git,tag=main/foo,recurse_submodules=true",
        git("path/to/dir", Local, tag("main/foo"), true, 1, ""),
    );
    assert_ref(
        "path/to/dir#format=git,tag=main/foo,recurse_submodules=false",
        git("path/to/dir", Local, tag("main/foo"), false, 1, ""),
    );
    assert_ref(
        "path/to/dir#format=git,ref=refs/remotes/origin/HEAD",
        git(
            "path/to/dir",
            Local,
            reference("refs/remotes/origin/HEAD"),
            false,
            50,
            "",
        ),
    );
    assert_ref(
        "path/to/dir#format=git,ref=refs/remotes/origin/HEAD,depth=10",
        git(
            "path/to/dir",
            Local,
            reference("refs/remotes/origin/HEAD"),
            false,
            10,
            "",
        ),
    );
}

#[test]
fn single_file_refs() {
    use CompressionType::{Gzip, None, Zstd};
    use FileScheme::Local;
    use Format::{Bin, Json};

    assert_ref("path/to/file.bin", single(Bin, "path/to/file.bin", Local, None));
    assert_ref(
        "path/to/file.bin.gz",
        single(Bin, "path/to/file.bin.gz", Local, Gzip),
    );
    assert_ref(
        "path/to/file.bin.zst",
        single(Bin, "path/to/file.bin.zst", Local, Zstd),
    );
    assert_ref(
        "path/to/file.json",
        single(Json, "path/to/file.json", Local, None),
    );
    assert_ref(
        "path/to/file.json.gz",
        single(Json, "path/to/file.json.gz", Local, Gzip),
    );
    assert_ref(
        "path/to/file.json.zst",
        single(Json, "path/to/file.json.zst", Local, Zstd),
    );
}

#[test]
fn explicit_compression_overrides_suffix() {
    use FileScheme::Local;
    use Format::Json;

    // an explicit override downgrades a .gz suffix to raw
    assert_ref(
        "path/to/file.json.gz#compression=none",
        single(Json, "path/to/file.json.gz", Local, CompressionType::None),
    );
    assert_ref(
        "path/to/file.json.gz#compression=gzip",
        single(Json, "path/to/file.json.gz", Local, CompressionType::Gzip),
    );
}

#[test]
fn single_file_format_overrides() {
    use CompressionType::{Gzip, None, Zstd};
    use FileScheme::Local;
    use Format::Bin;

    assert_ref("path/to/dir#format=bin", single(Bin, "path/to/dir", Local, None));
    assert_ref(
        "path/to/dir#format=bin,compression=none",
        single(Bin, "path/to/dir", Local, None),
    );
    assert_ref(
        "path/to/dir#format=bin,compression=gzip",
        single(Bin, "path/to/dir", Local, Gzip),
    );
    assert_ref(
        "path/to/file#format=bin,compression=zstd",
        single(Bin, "path/to/file", Local, Zstd),
    );
}

#[test]
fn stdio_refs() {
    use CompressionType::None;
    use FileScheme::Stdio;

    assert_ref("-", single(Format::Bin, "", Stdio, None));
    assert_ref("-#format=json", single(Format::Json, "", Stdio, None));
    assert_ref(
        "-#format=tar,strip_components=2",
        archive(Format::Tar, "", Stdio, ArchiveType::Tar, None, 2, ""),
    );
    assert_ref(
        "-#format=targz",
        archive(
            Format::Targz,
            "",
            Stdio,
            ArchiveType::Tar,
            CompressionType::Gzip,
            0,
            "",
        ),
    );
}

#[test]
fn null_device_refs() {
    assert_ref(
        NULL_DEVICE,
        single(Format::Bin, "", FileScheme::Null, CompressionType::None),
    );
}

#[test]
fn http_refs_default_to_bin() {
    use CompressionType::None;
    use FileScheme::Https;
    use Format::Bin;

    assert_ref(
        "https://github.com/path/to/file.bin",
        single(Bin, "github.com/path/to/file.bin", Https, None),
    );
    assert_ref(
        "https://example.com/download",
        single(Bin, "example.com/download", Https, None),
    );
    assert_ref(
        "https://github.com/path/to/file.ext#format=bin",
        single(Bin, "github.com/path/to/file.ext", Https, None),
    );
    // query strings are part of the path, kept verbatim
    assert_ref(
        "https://gitlab.com/api/v4/projects/foo/packages/generic/proto/0.0.1/proto.bin?private_token=bar#format=bin",
        single(
            Bin,
            "gitlab.com/api/v4/projects/foo/packages/generic/proto/0.0.1/proto.bin?private_token=bar",
            Https,
            None,
        ),
    );
}

#[test]
fn module_refs() {
    assert_ref(
        "example.com/foob/bar:v1",
        ParsedRef::Module(ModuleRef {
            identity: ModuleIdentity::new("example.com", "foob", "bar", Some("v1".to_owned()))
                .unwrap(),
        }),
    );
    assert_ref(
        "example.com/foob/bar",
        ParsedRef::Module(ModuleRef {
            identity: ModuleIdentity::new("example.com", "foob", "bar", None).unwrap(),
        }),
    );
    // a commit-ish reference is as good as a tag
    assert_ref(
        "example.com/foob/bar:b8488077530a4e4bb1b2bdbbde57d8b8",
        ParsedRef::Module(ModuleRef {
            identity: ModuleIdentity::new(
                "example.com",
                "foob",
                "bar",
                Some("b8488077530a4e4bb1b2bdbbde57d8b8".to_owned()),
            )
            .unwrap(),
        }),
    );
}

#[test]
fn module_shaped_paths_fall_back_to_dir_when_mod_is_excluded() {
    let all_but_mod: Vec<Format> = Format::ALL
        .iter()
        .copied()
        .filter(|f| *f != Format::Mod)
        .collect();
    assert_eq!(
        RefParser::new().parse("example.com/foob/bar:v1", &all_but_mod),
        Ok(dir("example.com/foob/bar:v1")),
    );
}

#[test]
fn sentinel_errors() {
    assert_err(
        "-#format=dir",
        ParseError::InvalidPath {
            format: Format::Dir,
            path: "-".to_owned(),
        },
    );
    assert_err(
        "-#format=git,branch=main",
        ParseError::InvalidPath {
            format: Format::Git,
            path: "-".to_owned(),
        },
    );
    assert_err(
        "-#format=mod",
        ParseError::InvalidPath {
            format: Format::Mod,
            path: "-".to_owned(),
        },
    );
    assert_err(
        &format!("{NULL_DEVICE}#format=bin"),
        ParseError::FormatOverrideNotAllowedForDevNull(NULL_DEVICE.to_owned()),
    );
}

#[test]
fn git_option_errors() {
    assert_err(
        "path/to/foo#format=git,branch=foo,tag=bar",
        ParseError::CannotSpecifyGitBranchAndTag,
    );
    assert_err(
        "path/to/foo#format=git,branch=foo,tag=bar,ref=baz",
        ParseError::CannotSpecifyGitBranchAndTag,
    );
    assert_err(
        "path/to/foo#format=git,tag=foo,ref=bar",
        ParseError::CannotSpecifyTagWithRef,
    );
    assert_err(
        "path/to/foo#format=git,depth=bar",
        ParseError::DepthParseError("bar".to_owned()),
    );
    assert_err(
        "path/to/foo#format=git,ref=foor,depth=0",
        ParseError::DepthZero,
    );
    assert_err(
        "path/to/foo#format=git,recurse_submodules=maybe",
        ParseError::OptionsCouldNotParseRecurseSubmodules("maybe".to_owned()),
    );
}

#[test]
fn suffix_errors() {
    assert_err(
        "path/to/foo.gz",
        ParseError::PathUnknownGz("path/to/foo.gz".to_owned()),
    );
    assert_err(
        "path/to/foo.bar.gz",
        ParseError::PathUnknownGz("path/to/foo.bar.gz".to_owned()),
    );
}

#[test]
fn option_errors() {
    assert_err(
        "path/to/foo#format=bar",
        ParseError::FormatUnknown("bar".to_owned()),
    );
    assert_err(
        "path/to/foo.tar.gz#strip_components=foo",
        ParseError::OptionsCouldNotParseStripComponents("foo".to_owned()),
    );
    assert_err(
        "path/to/foo.tar.gz#compression=foo",
        ParseError::CompressionUnknown("foo".to_owned()),
    );
    assert_err(
        "path/to/foo.tar.gz#foo=bar",
        ParseError::OptionsInvalidKey("foo".to_owned()),
    );
    assert_err(
        "path/to/foo.tar#compression=gzip,compression=zstd",
        ParseError::OptionsDuplicateKey("compression".to_owned()),
    );
    assert_err("path/to/foo#", ParseError::OptionsInvalid(String::new()));
    assert_err(
        "path/to/foo#branch",
        ParseError::OptionsInvalid("branch".to_owned()),
    );
}

#[test]
fn options_invalid_for_format() {
    assert_err(
        "path/to/foo.tar.gz#branch=main",
        ParseError::OptionsInvalidForFormat {
            format: Format::Tar,
            value: "path/to/foo.tar.gz#branch=main".to_owned(),
        },
    );
    assert_err(
        "path/to/some/foo#strip_components=1",
        ParseError::OptionsInvalidForFormat {
            format: Format::Dir,
            value: "path/to/some/foo#strip_components=1".to_owned(),
        },
    );
    assert_err(
        "path/to/some/foo#compression=none",
        ParseError::OptionsInvalidForFormat {
            format: Format::Dir,
            value: "path/to/some/foo#compression=none".to_owned(),
        },
    );
}

#[test]
fn zip_compression_errors() {
    for value in [
        "path/to/foo.zip#compression=none",
        "path/to/foo.zip#compression=gzip",
        "path/to/foo#format=zip,compression=none",
        "path/to/foo#format=zip,compression=gzip",
    ] {
        assert_err(value, ParseError::CannotSpecifyCompressionForZip);
    }
}

#[test]
fn empty_values() {
    assert_err("", ParseError::ValueEmpty);
    assert_err("#format=bin", ParseError::ValueEmpty);
}

#[test]
fn git_only_schemes_reject_other_formats() {
    assert_err(
        "ssh://user@host:path/to/file.tar",
        ParseError::InvalidPath {
            format: Format::Tar,
            path: "ssh://user@host:path/to/file.tar".to_owned(),
        },
    );
    assert_err(
        "git://host/file.bin",
        ParseError::InvalidPath {
            format: Format::Bin,
            path: "git://host/file.bin".to_owned(),
        },
    );
    assert_err(
        "https://hello.com/path#format=dir",
        ParseError::InvalidPath {
            format: Format::Dir,
            path: "https://hello.com/path".to_owned(),
        },
    );
}

#[test]
fn suffixless_git_schemes_default_to_git() {
    assert_ref(
        "ssh://user@hello.com:path/to/repo",
        git(
            "user@hello.com:path/to/repo",
            GitScheme::Ssh,
            GitTarget::None,
            false,
            1,
            "",
        ),
    );
}

#[test]
fn allowed_formats_restrict_resolution() {
    let parser = RefParser::new();
    assert_eq!(
        parser.parse("path/to/some/dir", &[Format::Tar, Format::Zip]),
        Err(ParseError::FormatUnknown("dir".to_owned())),
    );
    assert_eq!(
        parser.parse("path/to/file.tar", &[Format::Dir]),
        Err(ParseError::FormatUnknown("tar".to_owned())),
    );
}

#[test]
fn module_errors_pass_through_unchanged() {
    assert_err(
        "example.com/foob#format=mod",
        ParseError::Module(IdentityError::Malformed("example.com/foob".to_owned())),
    );
    assert_err(
        "example.com/Foo/bar#format=mod",
        ParseError::Module(IdentityError::InvalidOwner("Foo".to_owned())),
    );
}

#[test]
fn option_order_is_irrelevant() {
    let forward = parse("path/to/file.tar#compression=zstd,strip_components=2,subdir=x");
    let reverse = parse("path/to/file.tar#subdir=x,strip_components=2,compression=zstd");
    assert_eq!(forward, reverse);

    let forward = parse("repo#format=git,ref=refs/x,branch=main,depth=3");
    let reverse = parse("repo#depth=3,branch=main,ref=refs/x,format=git");
    assert_eq!(forward, reverse);
}

#[test]
fn resolution_is_deterministic() {
    for value in [
        "path/to/file.tar.gz#strip_components=1",
        "ssh://user@host:d.git#ref=refs/remotes/origin/HEAD,branch=main,depth=10",
        "example.com/foob/bar:v1",
        "path/to/foo.gz",
    ] {
        assert_eq!(parse(value), parse(value), "{value}");
    }
}

#[test]
fn returned_paths_are_normalization_fixpoints() {
    for value in [
        "path//to/./some/dir",
        "foo/..",
        "file:///path/../file.tar",
        "path/to/dir.git#subdir=a/./b",
        "https://hello.com/path/to/dir.git#branch=main",
    ] {
        let parsed = parse(value).unwrap();
        if let Some(path) = parsed.path() {
            assert_eq!(crate::normpath::normalize(path), path, "{value}");
        }
    }
}

/// A stand-in validator so the parser's delegation seam can be tested
/// without the registry grammar.
#[derive(Debug, Clone, Copy)]
struct StubResolver;

impl IdentityResolver for StubResolver {
    fn validate(&self, raw: &str) -> Result<ModuleIdentity, IdentityError> {
        if raw == "known-module" {
            ModuleIdentity::new("registry.test", "owner", "name", None)
        } else {
            Err(IdentityError::Malformed(raw.to_owned()))
        }
    }
}

#[test]
fn resolver_seam_is_honored() {
    let parser = RefParser::with_resolver(StubResolver);
    assert_eq!(
        parser.parse("known-module", Format::ALL),
        Ok(ParsedRef::Module(ModuleRef {
            identity: ModuleIdentity::new("registry.test", "owner", "name", None).unwrap(),
        })),
    );
    // anything the resolver rejects quietly falls back to a directory
    assert_eq!(
        parser.parse("unknown-module", Format::ALL),
        Ok(dir("unknown-module")),
    );
}
