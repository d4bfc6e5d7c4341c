/// A request fixture fed to the parser in reads of `chunk_size` bytes.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    file: TestFile,
    chunk_size: usize,
}

impl TestCase {
    pub fn new(name: &'static str, file: TestFile, chunk_size: usize) -> Self {
        Self { name, file, chunk_size: chunk_size.max(1) }
    }

    /// The whole fixture arrives in a single read.
    pub fn whole(name: &'static str, file: TestFile) -> Self {
        Self::new(name, file, file.content().len())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Splits the fixture into the reads the parser will see.
    pub fn chunks(&self) -> impl Iterator<Item = &'static [u8]> + use<> {
        self.file.content().as_bytes().chunks(self.chunk_size)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}
