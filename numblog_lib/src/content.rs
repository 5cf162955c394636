//! The NumPy primer page, as data.

use crate::block::ContentBlock::{self, CodeSample, Heading, Markdown, Paragraph, PlainText, Title};
use crate::block::{Document, HeadingLevel};

const PYTHON: &str = "python";

const INTRO: &str = "NumPy is the fundamental package for scientific computing in Python. \
It is a Python library that provides a multidimensional array object, various derived \
objects and an assortment of routines for fast operations on arrays, including mathematical, \
logical, shape manipulation, sorting, selecting, I/O, discrete Fourier transforms, \
basic linear algebra, basic statistical operations, random simulation and much more.";

const ARRAYS_VS_SEQUENCES: &str = "
### Numpy Arrays Vs Python Sequences
- NumPy arrays have a fixed size at creation, unlike Python lists (which can grow dynamically). Changing the size of an ndarray will create a new array and delete the original.
- The elements in a NumPy array are all required to be of the same data type, and thus will be the same size in memory
- NumPy arrays facilitate advanced mathematical and other types of operations on large numbers of data. Typically, such operations are executed more efficiently and with less code than is possible using Python’s built-in sequences
- A growing plethora of scientific and mathematical Python-based packages are using NumPy arrays; though these typically support Python-sequence input, they convert such input to NumPy arrays prior to processing, and they often output NumPy arrays.
";

const MORE_INFO: &str = "for more info..";

fn sub(text: &str) -> ContentBlock {
    Heading(text.to_owned(), HeadingLevel::Three)
}

fn text(text: &str) -> ContentBlock {
    PlainText(text.to_owned())
}

fn python(code: &str) -> ContentBlock {
    CodeSample(code.to_owned(), Some(PYTHON.to_owned()))
}

fn more_info(url: &str) -> Vec<ContentBlock> {
    vec![text(MORE_INFO), text(url)]
}

fn creating_arrays() -> Vec<ContentBlock> {
    vec![
        sub("Creating Numpy Arrays"),
        text("This is simple numpy array"),
        python(
            "
# 1D array
array = np.array([1,2,3,4])
print(array)
#output
[1 2 3 4]
",
        ),
        python(
            "
# 2D array
array = np.array([[1,2,3,4],[5,6,7,8]])
print(array)
#output
[[1 2 3 4]
 [5 6 7 8]]
",
        ),
        python(
            "
# 3D array
array = np.array([[[1,2],[3,4]],[[5,6],[7,8]]])
print(array)
",
        ),
    ]
}

fn dtype() -> Vec<ContentBlock> {
    let mut blocks = vec![
        sub("dtype"),
        text(
            "Describes how the bytes in the fixed-size block of memory corresponding \
             to an array item should be interpreted",
        ),
        python(
            "
#dtype
array = np.array([1,2,3,4],dtype = float)
",
        ),
    ];
    blocks.extend(more_info("https://numpy.org/doc/stable/reference/arrays.dtypes.html"));
    blocks
}

fn arange() -> Vec<ContentBlock> {
    let mut blocks = vec![
        sub("arange function"),
        text(
            "The numpy.arange() function in NumPy is used to create arrays with evenly \
             spaced values within a specified interval",
        ),
        python(
            "
# arange
array = np.arange(8)
print(array)
",
        ),
    ];
    blocks.extend(more_info("https://numpy.org/doc/stable/reference/generated/numpy.arange.html"));
    blocks
}

fn reshape() -> Vec<ContentBlock> {
    let mut blocks = vec![
        sub("reshape function"),
        text(
            "The numpy.reshape() function allows you to change the shape of an array \
             without altering its data. This is useful for organizing data in different \
             configurations.",
        ),
        python(
            "
#reshape
np.arange(4).reshape((2,2))
",
        ),
    ];
    blocks.extend(more_info("https://numpy.org/doc/stable/reference/generated/numpy.reshape.html"));
    blocks
}

fn ones() -> Vec<ContentBlock> {
    vec![
        sub("ones function"),
        text(
            "The np.ones function in NumPy is used to create a new array of given shape \
             and type, filled with ones",
        ),
        python(
            "
# ones
np.ones((3,4))
#output
array([[1., 1., 1., 1.],
       [1., 1., 1., 1.],
       [1., 1., 1., 1.]])
",
        ),
    ]
}

fn random() -> Vec<ContentBlock> {
    vec![
        sub("random function"),
        text(
            "Create an array of the given shape and populate it with random samples \
             from a uniform distribution over (0,1).",
        ),
        python(
            "
# random
# both are same
np.random.rand(2,3)
np.random.random((2,3))
#output
array([[ 0.14022471,  0.96360618],  #random
       [ 0.37601032,  0.25528411],  #random
       [ 0.49313049,  0.94909878]]) #random
",
        ),
    ]
}

fn reductions() -> Vec<ContentBlock> {
    let mut blocks = vec![
        sub("Statistical reductions"),
        text(
            "Reductions such as sum, mean, std, min and max collapse an array to a \
             single value, or along one axis when axis is given",
        ),
        python(
            "
a = np.array([[1,2,3],[4,5,6]])
a.sum()
#output
21
a.sum(axis=0)
#output
array([5, 7, 9])
a.mean(axis=1)
#output
array([2., 5.])
",
        ),
        python(
            "
a.min(axis=0)
#output
array([1, 2, 3])
a.max()
#output
6
np.std(a)
#output
1.707825127659933
",
        ),
    ];
    blocks.extend(more_info("https://numpy.org/doc/stable/reference/routines.statistics.html"));
    blocks
}

/// The full primer, top to bottom.
pub fn numpy_blog() -> Document {
    let mut blocks = vec![
        Title("Numpy Blog".to_owned()),
        Paragraph(INTRO.to_owned()),
        Markdown(ARRAYS_VS_SEQUENCES.to_owned()),
        sub("Import numpy"),
        python("\nimport numpy as np\n"),
    ];
    blocks.extend(creating_arrays());
    blocks.extend(dtype());
    blocks.extend(arange());
    blocks.extend(reshape());
    blocks.extend(ones());
    blocks.extend(random());
    blocks.extend(reductions());
    Document::new(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_title() {
        let doc = numpy_blog();
        assert_eq!(doc.blocks()[0], Title("Numpy Blog".to_owned()));
        assert_eq!(doc.title(), Some("Numpy Blog"));
    }

    #[test]
    fn sections_in_order() {
        let doc = numpy_blog();
        let headings: Vec<&str> = doc
            .iter()
            .filter_map(|b| match *b {
                Heading(ref t, _) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headings,
            vec![
                "Import numpy",
                "Creating Numpy Arrays",
                "dtype",
                "arange function",
                "reshape function",
                "ones function",
                "random function",
                "Statistical reductions",
            ]
        );
    }

    fn code_of(heading: &str) -> Vec<String> {
        let doc = numpy_blog();
        let start = doc
            .iter()
            .position(|b| match *b {
                Heading(ref t, _) => t == heading,
                _ => false,
            })
            .unwrap();
        doc.blocks()[start + 1..]
            .iter()
            .take_while(|b| match **b {
                Heading(..) => false,
                _ => true,
            })
            .filter_map(|b| match *b {
                CodeSample(ref c, _) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn samples_keep_the_page_wording() {
        let arrays = code_of("Creating Numpy Arrays");
        assert_eq!(arrays.len(), 3);
        assert!(arrays[0].contains("#output\n[1 2 3 4]"));
        assert!(arrays[2].contains("# 3D array"));
        assert!(!arrays[2].contains("#output"));
        assert!(!code_of("arange function")[0].contains("#output"));
        assert!(!code_of("reshape function")[0].contains("#output"));
        let random = code_of("random function");
        assert!(random[0].contains("np.random.rand(2,3)\nnp.random.random((2,3))"));
        assert!(numpy_blog()
            .iter()
            .any(|b| *b == text(
                "Create an array of the given shape and populate it with random samples \
                 from a uniform distribution over (0,1)."
            )));
    }

    #[test]
    fn all_code_is_python() {
        for block in numpy_blog().iter() {
            if let CodeSample(_, ref lang) = *block {
                assert_eq!(lang.as_ref().map(String::as_str), Some(PYTHON));
            }
        }
    }
}
