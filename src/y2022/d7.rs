use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::{is_not, tag},
        character::complete::line_ending,
        combinator::{all_consuming, map, opt, value},
        error::Error as NomError,
        multi::many0,
        sequence::{preceded, separated_pair, terminated},
        Err, IResult,
    },
};

/// A directory or file name: any run of characters up to a space or line break
fn parse_name(input: &str) -> IResult<&str, &str> {
    is_not(" \n")(input)
}

/// The value stored at one node of the device's file tree
///
/// A file's size is known when its entry is listed; a directory's total size starts unknown and is
/// computed and cached on the first query, after construction is complete.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum DirectoryEntry {
    Directory { name: String, size: Option<u32> },
    File { name: String, size: u32 },
}

impl DirectoryEntry {
    fn directory(name: &str) -> Self {
        Self::Directory {
            name: name.into(),
            size: None,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } => name,
        }
    }

    fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }
}

impl Parse for DirectoryEntry {
    /// An entry line printed by `ls`: `dir {name}`, or `{size} {name}`
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(preceded(tag("dir "), parse_name), Self::directory),
            map(
                separated_pair(parse_integer, tag(" "), parse_name),
                |(size, name): (u32, &str)| Self::File {
                    name: name.into(),
                    size,
                },
            ),
        ))(input)
    }
}

/// Target of a `cd` command
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum ChangeDirectoryTarget {
    Root,
    Parent,
    Child(String),
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Command {
    ChangeDirectory(ChangeDirectoryTarget),
    List,
}

impl Parse for Command {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        preceded(
            tag("$ "),
            alt((
                map(
                    preceded(
                        tag("cd "),
                        alt((
                            value(ChangeDirectoryTarget::Root, tag("/")),
                            value(ChangeDirectoryTarget::Parent, tag("..")),
                            map(parse_name, |name: &str| {
                                ChangeDirectoryTarget::Child(name.into())
                            }),
                        )),
                    ),
                    Self::ChangeDirectory,
                ),
                value(Self::List, tag("ls")),
            )),
        )(input)
    }
}

/// One line of the recorded terminal session
///
/// A valid line belongs to exactly one category, so trying the alternatives in order suffices;
/// command forms parse before entry forms.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum TerminalLine {
    Command(Command),
    Entry(DirectoryEntry),
}

impl Parse for TerminalLine {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(Command::parse, Self::Command),
            map(DirectoryEntry::parse, Self::Entry),
        ))(input)
    }
}

/// A logic error encountered while replaying the terminal session
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ExecuteError {
    /// `$ cd ..` was issued while the cursor was at the root
    NoParent,
}

/// The reconstructed file tree, plus the cursor directory that `cd` commands move
struct FileSystem {
    tree: Tree<DirectoryEntry>,
    cursor: NodeIndex,
}

impl FileSystem {
    fn new() -> Self {
        let tree: Tree<DirectoryEntry> = Tree::new(DirectoryEntry::directory("/"));
        let cursor: NodeIndex = tree.root();

        Self { tree, cursor }
    }

    fn try_find_directory_child(&self, name: &str) -> Option<NodeIndex> {
        self.tree
            .get(self.cursor)
            .children()
            .iter()
            .copied()
            .find(|&child| {
                let entry: &DirectoryEntry = self.tree.get(child).value();

                entry.is_directory() && entry.name() == name
            })
    }

    fn try_change_directory(&mut self, target: &ChangeDirectoryTarget) -> Result<(), ExecuteError> {
        self.cursor = match target {
            ChangeDirectoryTarget::Root => self.tree.root(),
            ChangeDirectoryTarget::Parent => self
                .tree
                .parent_of(self.cursor)
                .ok_or(ExecuteError::NoParent)?,
            ChangeDirectoryTarget::Child(name) => match self.try_find_directory_child(name) {
                Some(child) => child,

                // A directory can be entered before it's ever listed
                None => self
                    .tree
                    .add_child(self.cursor, DirectoryEntry::directory(name)),
            },
        };

        Ok(())
    }

    fn add_entry(&mut self, entry: DirectoryEntry) {
        // Re-listing the cursor directory must not duplicate its children
        if !entry.is_directory() || self.try_find_directory_child(entry.name()).is_none() {
            self.tree.add_child(self.cursor, entry);
        }
    }

    fn execute(&mut self, terminal_line: TerminalLine) -> Result<(), ExecuteError> {
        match terminal_line {
            TerminalLine::Command(Command::ChangeDirectory(target)) => {
                self.try_change_directory(&target)
            }
            TerminalLine::Command(Command::List) => Ok(()),
            TerminalLine::Entry(entry) => {
                self.add_entry(entry);

                Ok(())
            }
        }
    }

    /// A file's intrinsic size, or a directory's cached size if it has been computed
    fn try_known_size(&self, index: NodeIndex) -> Option<u32> {
        match self.tree.get(index).value() {
            DirectoryEntry::File { size, .. } => Some(*size),
            DirectoryEntry::Directory { size, .. } => *size,
        }
    }

    /// Total size of the subtree at `index`
    ///
    /// A directory's size is the sum of its children's sizes, computed at most once per node and
    /// cached in place; an empty directory has size 0. Construction is assumed complete before the
    /// first query.
    fn size(&mut self, index: NodeIndex) -> u32 {
        if let Some(known_size) = self.try_known_size(index) {
            return known_size;
        }

        let mut size: u32 = 0_u32;
        let mut child_position: usize = 0_usize;

        while let Some(&child) = self.tree.get(index).children().get(child_position) {
            size += self.size(child);
            child_position += 1_usize;
        }

        if let DirectoryEntry::Directory {
            size: cached_size, ..
        } = self.tree.get_mut(index).value_mut()
        {
            *cached_size = Some(size);
        }

        size
    }

    /// The total sizes of all directories, in pre-order
    fn directory_sizes(&mut self) -> Vec<u32> {
        let root: NodeIndex = self.tree.root();
        let directories: Vec<NodeIndex> = self
            .tree
            .iter_depth_first(root)
            .filter(|&index| self.tree.get(index).value().is_directory())
            .collect();

        directories
            .into_iter()
            .map(|directory| self.size(directory))
            .collect()
    }
}

#[allow(dead_code)]
#[derive(Debug)]
pub enum SolutionParseError<'i> {
    /// A line that no sub-parser accepts; fatal for the whole run
    ParseFailure(Err<NomError<&'i str>>),
    ExecuteFailed(ExecuteError),
}

pub struct Solution(FileSystem);

impl Solution {
    const SMALL_DIRECTORY_MAX_SIZE: u32 = 100_000_u32;
    const TOTAL_DISK_SPACE: u32 = 70_000_000_u32;
    const REQUIRED_UNUSED_SPACE: u32 = 30_000_000_u32;

    /// Sum of the total sizes of all directories no larger than 100000
    ///
    /// Nested directories count once per directory, so a file can contribute to several of the
    /// summed sizes.
    fn small_directory_size_sum(&mut self) -> u32 {
        self.0
            .directory_sizes()
            .into_iter()
            .filter(|&size| size <= Self::SMALL_DIRECTORY_MAX_SIZE)
            .sum()
    }

    /// Total size of the smallest directory whose deletion would leave at least the unused space
    /// the update needs
    fn try_smallest_sufficient_directory_size(&mut self) -> Option<u32> {
        let root: NodeIndex = self.0.tree.root();
        let used_space: u32 = self.0.size(root);
        let deficit: u32 =
            Self::REQUIRED_UNUSED_SPACE.saturating_sub(Self::TOTAL_DISK_SPACE - used_space);

        self.0
            .directory_sizes()
            .into_iter()
            .filter(|&size| size >= deficit)
            .min()
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.small_directory_size_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.try_smallest_sufficient_directory_size());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = SolutionParseError<'i>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        let terminal_lines: Vec<TerminalLine> =
            all_consuming(many0(terminated(TerminalLine::parse, opt(line_ending))))(input)
                .map_err(SolutionParseError::ParseFailure)?
                .1;
        let mut file_system: FileSystem = FileSystem::new();

        for terminal_line in terminal_lines {
            file_system
                .execute(terminal_line)
                .map_err(SolutionParseError::ExecuteFailed)?;
        }

        Ok(Self(file_system))
    }
}
